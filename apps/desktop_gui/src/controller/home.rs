//! Home page state: top-5 films and actors with a side detail panel.

use shared::{
    domain::ActorId,
    protocol::{ActorDetail, ActorSummary, Film},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::LoadState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeTab {
    #[default]
    TopFilms,
    TopActors,
}

#[derive(Default)]
pub struct HomeState {
    pub tab: HomeTab,
    pub top_films: Vec<Film>,
    pub top_actors: Vec<ActorSummary>,
    pub load: LoadState,
    /// Film detail comes from the already-fetched row; only actors need a
    /// follow-up fetch.
    pub selected_film: Option<Film>,
    pub selected_actor: Option<ActorDetail>,
    started: bool,
}

impl HomeState {
    /// Commands for the first frame the page is shown; empty afterwards.
    pub fn ensure_started(&mut self) -> Vec<BackendCommand> {
        if self.started {
            return Vec::new();
        }
        self.started = true;
        self.load = LoadState::Loading;
        vec![BackendCommand::FetchTopFilms, BackendCommand::FetchTopActors]
    }

    pub fn select_film(&mut self, film: Film) {
        self.selected_actor = None;
        self.selected_film = Some(film);
    }

    pub fn select_actor(&mut self, actor_id: ActorId) -> BackendCommand {
        self.selected_film = None;
        BackendCommand::FetchActorDetail { actor_id }
    }

    pub fn on_top_films(&mut self, films: Vec<Film>) {
        self.top_films = films;
        self.load = if self.top_films.is_empty() && self.top_actors.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Populated
        };
    }

    pub fn on_top_actors(&mut self, actors: Vec<ActorSummary>) {
        self.top_actors = actors;
        self.load = if self.top_films.is_empty() && self.top_actors.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Populated
        };
    }

    pub fn on_actor_detail(&mut self, detail: ActorDetail) {
        self.selected_actor = Some(detail);
    }

    pub fn on_fetch_failed(&mut self) {
        if self.load == LoadState::Loading {
            self.load = LoadState::Empty;
        }
    }
}
