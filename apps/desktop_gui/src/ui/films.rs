//! Films page: searchable list and the film detail modal.

use shared::domain::FilmSearchBy;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::films::FilmsState;
use crate::controller::LoadState;

pub fn show(ui: &mut egui::Ui, state: &mut FilmsState) -> Vec<BackendCommand> {
    let mut commands = Vec::new();

    show_search_row(ui, state, &mut commands);
    ui.add_space(8.0);
    show_results(ui, state, &mut commands);
    show_detail_modal(ui, state);

    commands
}

fn show_search_row(ui: &mut egui::Ui, state: &mut FilmsState, commands: &mut Vec<BackendCommand>) {
    ui.horizontal(|ui| {
        let query_response = ui.add(
            egui::TextEdit::singleline(&mut state.query)
                .hint_text("Search (choose a mode and click Search)")
                .desired_width(280.0),
        );

        for (mode, label) in [
            (FilmSearchBy::Film, "By Film"),
            (FilmSearchBy::Actor, "By Actor"),
            (FilmSearchBy::Genre, "By Genre"),
        ] {
            if ui
                .selectable_label(state.search_by == mode, label)
                .clicked()
            {
                state.set_mode(mode);
            }
        }

        let submitted = query_response.lost_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Search").clicked() || submitted {
            commands.push(state.submit_search());
        }
        if ui.button("Show All").clicked() {
            commands.push(state.show_all());
        }
    });
}

fn show_results(ui: &mut egui::Ui, state: &mut FilmsState, commands: &mut Vec<BackendCommand>) {
    match state.load {
        LoadState::Idle | LoadState::Loading => {
            ui.label("Loading...");
        }
        LoadState::Empty => {
            ui.weak("No films found.");
        }
        LoadState::Populated => {
            let films = state.films.clone();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for film in &films {
                        let response = egui::Frame::group(ui.style())
                            .show(ui, |ui| {
                                ui.strong(&film.title);
                                ui.weak(
                                    film.description
                                        .as_deref()
                                        .unwrap_or("No description."),
                                );
                                ui.horizontal(|ui| {
                                    if let Some(category) = &film.category {
                                        ui.small(format!("Genre: {category}"));
                                    }
                                    if let Some(actors) = &film.actors {
                                        ui.small(format!("Actors: {actors}"));
                                    }
                                });
                            })
                            .response
                            .interact(egui::Sense::click());
                        if response.clicked() {
                            commands.push(state.open_detail(film.film_id));
                        }
                    }
                });
        }
    }
}

fn show_detail_modal(ui: &mut egui::Ui, state: &mut FilmsState) {
    if !state.show_modal {
        return;
    }
    let Some(detail) = state.detail.clone() else {
        return;
    };

    let mut open = true;
    egui::Window::new("Film Details")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .show(ui.ctx(), |ui| {
            ui.strong(&detail.title);
            ui.weak(detail.description.as_deref().unwrap_or("No description."));
            ui.add_space(6.0);
            if let Some(year) = detail.release_year {
                ui.label(format!("Year: {year}"));
            }
            if let Some(length) = detail.length {
                ui.label(format!("Length: {length} min"));
            }
            if let Some(rating) = &detail.rating {
                ui.label(format!("Rating: {rating}"));
            }
            if let Some(category) = &detail.category {
                ui.label(format!("Genre: {category}"));
            }
            if let Some(count) = detail.rental_count {
                ui.label(format!("Rentals: {count}"));
            }
            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                state.close_modal();
            }
        });
    if !open {
        state.close_modal();
    }
}
