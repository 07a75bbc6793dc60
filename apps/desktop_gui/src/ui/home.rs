//! Home page: top-5 rented films and top-5 actors with a detail panel.

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::home::{HomeState, HomeTab};
use crate::controller::LoadState;

pub fn show(ui: &mut egui::Ui, state: &mut HomeState) -> Vec<BackendCommand> {
    let mut commands = Vec::new();

    ui.horizontal(|ui| {
        if ui
            .selectable_label(state.tab == HomeTab::TopFilms, "Top Movies")
            .clicked()
        {
            state.tab = HomeTab::TopFilms;
        }
        if ui
            .selectable_label(state.tab == HomeTab::TopActors, "Top Actors")
            .clicked()
        {
            state.tab = HomeTab::TopActors;
        }
    });
    ui.add_space(8.0);

    if state.load == LoadState::Loading {
        ui.label("Loading...");
        return commands;
    }

    ui.columns(2, |columns| {
        match state.tab {
            HomeTab::TopFilms => show_top_films(&mut columns[0], state),
            HomeTab::TopActors => {
                if let Some(cmd) = show_top_actors(&mut columns[0], state) {
                    commands.push(cmd);
                }
            }
        }
        show_detail_panel(&mut columns[1], state);
    });

    commands
}

fn show_top_films(ui: &mut egui::Ui, state: &mut HomeState) {
    ui.heading("Top 5 Most Rented Films");
    ui.add_space(6.0);
    if state.top_films.is_empty() {
        ui.weak("No films to show.");
        return;
    }

    let films = state.top_films.clone();
    for (index, film) in films.iter().enumerate() {
        let response = egui::Frame::group(ui.style())
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("#{}", index + 1)).strong());
                    ui.strong(&film.title);
                });
                if let Some(description) = &film.description {
                    ui.weak(description);
                }
            })
            .response
            .interact(egui::Sense::click());
        if response.clicked() {
            state.select_film(film.clone());
        }
    }
}

fn show_top_actors(ui: &mut egui::Ui, state: &mut HomeState) -> Option<BackendCommand> {
    ui.heading("Top 5 Actors");
    ui.add_space(6.0);
    if state.top_actors.is_empty() {
        ui.weak("No actors to show.");
        return None;
    }

    let mut command = None;
    let actors = state.top_actors.clone();
    for (index, actor) in actors.iter().enumerate() {
        let response = egui::Frame::group(ui.style())
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("#{}", index + 1)).strong());
                    ui.vertical(|ui| {
                        ui.strong(format!("{} {}", actor.first_name, actor.last_name));
                        if let Some(count) = actor.film_count {
                            ui.weak(format!("{count} movies"));
                        }
                    });
                });
            })
            .response
            .interact(egui::Sense::click());
        if response.clicked() {
            command = Some(state.select_actor(actor.actor_id));
        }
    }
    command
}

fn show_detail_panel(ui: &mut egui::Ui, state: &mut HomeState) {
    if let Some(film) = state.selected_film.clone() {
        ui.heading("Movie Details");
        ui.add_space(6.0);
        ui.strong(&film.title);
        if let Some(description) = &film.description {
            ui.weak(description);
        }
        ui.add_space(6.0);
        if let Some(year) = film.release_year {
            ui.label(format!("Year: {year}"));
        }
        if let Some(rating) = &film.rating {
            ui.label(format!("Rating: {rating}"));
        }
        if let Some(length) = film.length {
            ui.label(format!("Length: {length} min"));
        }
        if let Some(category) = &film.category {
            ui.label(format!("Category: {category}"));
        }
        if let Some(count) = film.rental_count {
            ui.add_space(6.0);
            ui.strong(format!("{count} Total Rentals"));
        }
    } else if let Some(actor) = state.selected_actor.clone() {
        ui.heading("Actor Details");
        ui.add_space(6.0);
        ui.strong(format!("{} {}", actor.first_name, actor.last_name));
        if let Some(count) = actor.film_count {
            ui.label(format!("{count} Movies"));
        }
        ui.add_space(6.0);
        ui.strong("Top 5 Movies:");
        for (index, movie) in actor.top_movies.iter().enumerate() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(&movie.title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(format!("#{}", index + 1));
                    });
                });
                if let Some(count) = movie.rental_count {
                    ui.weak(format!("{count} rentals"));
                }
            });
        }
    }
}
