//! Customers page: paged search, add/edit forms, delete, and the rental
//! history overlay.

use chrono::NaiveDateTime;
use shared::{
    domain::CustomerSearchBy,
    protocol::{Customer, CustomerForm, Rental, RentalStatus},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::customers::{CustomersState, FormTarget};
use crate::controller::LoadState;

pub fn show(ui: &mut egui::Ui, state: &mut CustomersState) -> Vec<BackendCommand> {
    let mut commands = Vec::new();

    show_search_row(ui, state, &mut commands);
    ui.add_space(6.0);

    if ui.button("+ Add Customer").clicked() {
        state.open_add();
    }
    if state.form_target == Some(FormTarget::Add) {
        ui.add_space(6.0);
        show_add_form(ui, state, &mut commands);
    }

    ui.add_space(8.0);
    show_results(ui, state, &mut commands);
    show_detail_overlay(ui, state, &mut commands);

    commands
}

fn show_search_row(
    ui: &mut egui::Ui,
    state: &mut CustomersState,
    commands: &mut Vec<BackendCommand>,
) {
    ui.horizontal(|ui| {
        let query_response = ui.add(
            egui::TextEdit::singleline(&mut state.query)
                .hint_text("Search (choose a mode and click Search)")
                .desired_width(280.0),
        );

        for (mode, label) in [
            (CustomerSearchBy::Id, "By ID"),
            (CustomerSearchBy::FirstName, "By First Name"),
            (CustomerSearchBy::LastName, "By Last Name"),
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

fn form_fields(ui: &mut egui::Ui, form: &mut CustomerForm) {
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut form.first_name)
                .hint_text("First name")
                .desired_width(160.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut form.last_name)
                .hint_text("Last name")
                .desired_width(160.0),
        );
    });
    ui.add(
        egui::TextEdit::singleline(&mut form.email)
            .hint_text("Email")
            .desired_width(336.0),
    );
}

fn show_add_form(
    ui: &mut egui::Ui,
    state: &mut CustomersState,
    commands: &mut Vec<BackendCommand>,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.strong("Add New Customer");
        form_fields(ui, &mut state.form);
        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                state.cancel_form();
            }
            if ui.button("Save Customer").clicked() {
                commands.extend(state.submit_form());
            }
        });
    });
}

fn show_results(
    ui: &mut egui::Ui,
    state: &mut CustomersState,
    commands: &mut Vec<BackendCommand>,
) {
    match state.load {
        LoadState::Idle | LoadState::Loading => {
            ui.label("Loading...");
            return;
        }
        LoadState::Empty => {
            ui.weak("No customers found.");
        }
        LoadState::Populated => {
            let rows = state.customers.clone();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .max_height(ui.available_height() - 40.0)
                .show(ui, |ui| {
                    for customer in &rows {
                        show_customer_row(ui, state, customer, commands);
                    }
                });
        }
    }

    ui.add_space(6.0);
    show_pagination(ui, state, commands);
}

fn show_customer_row(
    ui: &mut egui::Ui,
    state: &mut CustomersState,
    customer: &Customer,
    commands: &mut Vec<BackendCommand>,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong(format!(
                "{} {}",
                customer.first_name.as_deref().unwrap_or_default(),
                customer.last_name.as_deref().unwrap_or_default()
            ));
            ui.weak(format!("#{}", customer.customer_id.0));
        });
        ui.weak(customer.email.as_deref().unwrap_or("No email"));
        ui.horizontal(|ui| {
            if let Some(active) = customer.active {
                ui.small(format!(
                    "Status: {}",
                    if active != 0 { "Active" } else { "Inactive" }
                ));
            }
            if let Some(create_date) = &customer.create_date {
                ui.small(format!("Created: {}", display_date(create_date)));
            }
        });
        ui.horizontal(|ui| {
            if ui.button("Edit").clicked() {
                state.open_edit(customer);
            }
            if ui.button("Delete").clicked() {
                commands.push(state.delete(customer.customer_id));
            }
            if ui.button("Rentals").clicked() {
                commands.push(state.open_detail(customer.customer_id));
            }
        });

        if state.is_editing(customer.customer_id) {
            ui.separator();
            form_fields(ui, &mut state.form);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    state.cancel_form();
                }
                if ui.button("Save Changes").clicked() {
                    commands.extend(state.submit_form());
                }
            });
        }
    });
}

fn show_pagination(
    ui: &mut egui::Ui,
    state: &mut CustomersState,
    commands: &mut Vec<BackendCommand>,
) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(state.can_prev(), egui::Button::new("Prev"))
            .clicked()
        {
            commands.extend(state.prev_page());
        }
        ui.weak(format!("Page {}", state.page.max(1)));
        if ui
            .add_enabled(state.can_next(), egui::Button::new("Next"))
            .clicked()
        {
            commands.extend(state.next_page());
        }
    });
}

fn show_detail_overlay(
    ui: &mut egui::Ui,
    state: &mut CustomersState,
    commands: &mut Vec<BackendCommand>,
) {
    let Some(detail) = state.detail.clone() else {
        return;
    };
    let customer_id = detail.customer.customer_id;

    let mut open = true;
    egui::Window::new("Customer Rentals")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .show(ui.ctx(), |ui| {
            ui.strong(format!(
                "{} {}",
                detail.customer.first_name.as_deref().unwrap_or_default(),
                detail.customer.last_name.as_deref().unwrap_or_default()
            ));
            ui.weak(format!("#{}", customer_id.0));
            ui.add_space(6.0);

            if detail.rentals.is_empty() {
                ui.weak("No rentals on record.");
            } else {
                egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for rental in &detail.rentals {
                        show_rental_row(ui, state, customer_id, rental, commands);
                    }
                });
            }

            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                state.close_detail();
            }
        });
    if !open {
        state.close_detail();
    }
}

fn show_rental_row(
    ui: &mut egui::Ui,
    state: &mut CustomersState,
    customer_id: shared::domain::CustomerId,
    rental: &Rental,
    commands: &mut Vec<BackendCommand>,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong(rental.title.as_deref().unwrap_or("Unknown title"));
            if let Some(rating) = &rental.rating {
                ui.small(format!("({rating})"));
            }
        });
        ui.horizontal(|ui| {
            if let Some(rented) = &rental.rental_date {
                ui.small(format!("Rented: {}", display_date(rented)));
            }
            match &rental.return_date {
                Some(returned) => {
                    ui.small(format!("Returned: {}", display_date(returned)));
                }
                None => {
                    ui.small("Not returned");
                }
            }
        });
        let is_active = rental.status == Some(RentalStatus::Active)
            || (rental.status.is_none() && rental.return_date.is_none());
        if is_active && ui.button("Mark returned").clicked() {
            commands.push(state.return_rental(rental.rental_id, customer_id));
        }
    });
}

/// Server timestamps are opaque strings; show the date part when it parses,
/// the raw value otherwise.
fn display_date(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date().to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::display_date;

    #[test]
    fn sql_timestamps_render_as_dates_and_junk_passes_through() {
        assert_eq!(display_date("2006-02-14 22:04:36"), "2006-02-14");
        assert_eq!(display_date("not-a-date"), "not-a-date");
    }
}
