//! Backend worker: a dedicated thread running a tokio runtime, draining
//! the UI command queue in FIFO order against the rental API.

use std::thread;

use client_core::{RentalApiClient, RentalBackend};
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::{CustomerMutation, UiError, UiErrorContext, UiEvent};

pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = RentalApiClient::new(settings.api_base_url);
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Connected to {}",
                client.base_url()
            )));

            while let Ok(cmd) = cmd_rx.recv() {
                process_command(&client, cmd, &ui_tx).await;
            }
        });
    });
}

/// Execute one command against the backend and push the outcome to the UI.
/// Failures become classified [`UiEvent::Error`]s; nothing here panics.
pub(crate) async fn process_command<B: RentalBackend>(
    backend: &B,
    cmd: BackendCommand,
    ui_tx: &Sender<UiEvent>,
) {
    info!(command = cmd.name(), "backend: executing command");
    match cmd {
        BackendCommand::FetchTopFilms => match backend.top_rented_films().await {
            Ok(films) => {
                let _ = ui_tx.try_send(UiEvent::TopFilmsLoaded(films));
            }
            Err(err) => send_error(ui_tx, UiErrorContext::TopLists, err),
        },
        BackendCommand::FetchTopActors => match backend.top_actors().await {
            Ok(actors) => {
                let _ = ui_tx.try_send(UiEvent::TopActorsLoaded(actors));
            }
            Err(err) => send_error(ui_tx, UiErrorContext::TopLists, err),
        },
        BackendCommand::FetchActorDetail { actor_id } => {
            match backend.actor_detail(actor_id).await {
                Ok(detail) => {
                    let _ = ui_tx.try_send(UiEvent::ActorDetailLoaded(detail));
                }
                Err(err) => send_error(ui_tx, UiErrorContext::ActorDetail, err),
            }
        }
        BackendCommand::SearchFilms { by, query } => {
            match backend.search_films(by, &query).await {
                Ok(films) => {
                    let _ = ui_tx.try_send(UiEvent::FilmsLoaded(films));
                }
                Err(err) => send_error(ui_tx, UiErrorContext::FilmSearch, err),
            }
        }
        BackendCommand::FetchFilmDetail { film_id } => match backend.film_detail(film_id).await {
            Ok(film) => {
                let _ = ui_tx.try_send(UiEvent::FilmDetailLoaded(film));
            }
            Err(err) => send_error(ui_tx, UiErrorContext::FilmDetail, err),
        },
        BackendCommand::SearchCustomers {
            by,
            query,
            page,
            page_size,
        } => match backend.search_customers(by, &query, page, page_size).await {
            Ok(page) => {
                let _ = ui_tx.try_send(UiEvent::CustomersLoaded(page));
            }
            Err(err) => send_error(ui_tx, UiErrorContext::CustomerSearch, err),
        },
        BackendCommand::FetchCustomerDetail { customer_id } => {
            match backend.customer_detail(customer_id).await {
                Ok(detail) => {
                    let _ = ui_tx.try_send(UiEvent::CustomerDetailLoaded(detail));
                }
                Err(err) => send_error(ui_tx, UiErrorContext::CustomerDetail, err),
            }
        }
        BackendCommand::AddCustomer { form } => match backend.add_customer(&form).await {
            Ok(()) => {
                let _ = ui_tx.try_send(UiEvent::CustomerMutationCompleted(
                    CustomerMutation::Added,
                ));
            }
            Err(err) => send_error(ui_tx, UiErrorContext::CustomerMutation, err),
        },
        BackendCommand::EditCustomer { customer_id, form } => {
            match backend.edit_customer(customer_id, &form).await {
                Ok(()) => {
                    let _ = ui_tx.try_send(UiEvent::CustomerMutationCompleted(
                        CustomerMutation::Edited,
                    ));
                }
                Err(err) => send_error(ui_tx, UiErrorContext::CustomerMutation, err),
            }
        }
        BackendCommand::DeleteCustomer { customer_id } => {
            match backend.delete_customer(customer_id).await {
                Ok(()) => {
                    let _ = ui_tx.try_send(UiEvent::CustomerMutationCompleted(
                        CustomerMutation::Deleted,
                    ));
                }
                Err(err) => send_error(ui_tx, UiErrorContext::CustomerMutation, err),
            }
        }
        BackendCommand::ReturnRental {
            rental_id,
            customer_id,
        } => match backend.return_rental(rental_id).await {
            Ok(()) => {
                let _ = ui_tx.try_send(UiEvent::RentalReturned { customer_id });
            }
            Err(err) => send_error(ui_tx, UiErrorContext::RentalReturn, err),
        },
    }
}

fn send_error(ui_tx: &Sender<UiEvent>, context: UiErrorContext, err: anyhow::Error) {
    error!(?context, "backend: command failed: {err:#}");
    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
        context,
        format!("{err:#}"),
    )));
}
