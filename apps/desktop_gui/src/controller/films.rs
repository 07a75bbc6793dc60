//! Films page state: searchable film list with a detail modal.

use shared::{
    domain::{FilmId, FilmSearchBy},
    protocol::Film,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::LoadState;

#[derive(Default)]
pub struct FilmsState {
    pub query: String,
    pub search_by: FilmSearchBy,
    pub load: LoadState,
    pub films: Vec<Film>,
    pub detail: Option<Film>,
    pub show_modal: bool,
    started: bool,
}

impl FilmsState {
    /// Initial unfiltered fetch the first time the page is shown.
    pub fn ensure_started(&mut self) -> Option<BackendCommand> {
        if self.started {
            return None;
        }
        self.started = true;
        self.load = LoadState::Loading;
        Some(BackendCommand::SearchFilms {
            by: FilmSearchBy::All,
            query: String::new(),
        })
    }

    /// Mode buttons only select the column; the fetch happens on submit.
    pub fn set_mode(&mut self, by: FilmSearchBy) {
        self.search_by = by;
    }

    pub fn submit_search(&mut self) -> BackendCommand {
        self.load = LoadState::Loading;
        BackendCommand::SearchFilms {
            by: self.search_by,
            query: self.query.clone(),
        }
    }

    /// Reset query and mode, then re-fetch everything.
    pub fn show_all(&mut self) -> BackendCommand {
        self.query.clear();
        self.search_by = FilmSearchBy::All;
        self.load = LoadState::Loading;
        BackendCommand::SearchFilms {
            by: FilmSearchBy::All,
            query: String::new(),
        }
    }

    /// Clicking a row issues the follow-up detail fetch; the modal opens
    /// when the response arrives.
    pub fn open_detail(&mut self, film_id: FilmId) -> BackendCommand {
        BackendCommand::FetchFilmDetail { film_id }
    }

    pub fn close_modal(&mut self) {
        self.show_modal = false;
        self.detail = None;
    }

    pub fn on_films_loaded(&mut self, films: Vec<Film>) {
        self.load = if films.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Populated
        };
        self.films = films;
    }

    pub fn on_detail_loaded(&mut self, film: Film) {
        self.detail = Some(film);
        self.show_modal = true;
    }

    pub fn on_search_failed(&mut self) {
        self.films.clear();
        self.load = LoadState::Empty;
    }
}
