//! App shell: navigation frame, status line, and the per-frame event pump.

use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::customers::CustomersState;
use crate::controller::events::{CustomerMutation, UiErrorContext, UiEvent};
use crate::controller::films::FilmsState;
use crate::controller::home::HomeState;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui;

/// Static navigation frame: which page controller is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Films,
    Customers,
}

impl Page {
    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Films => "Films",
            Self::Customers => "Customers",
        }
    }
}

pub struct AdminGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    page: Page,
    pub home: HomeState,
    pub films: FilmsState,
    pub customers: CustomersState,

    status: String,
}

impl AdminGuiApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            page: Page::default(),
            home: HomeState::default(),
            films: FilmsState::default(),
            customers: CustomersState::default(),
            status: "Starting backend worker...".to_string(),
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn dispatch_all(&mut self, commands: Vec<BackendCommand>) {
        for cmd in commands {
            self.dispatch(cmd);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::TopFilmsLoaded(films) => self.home.on_top_films(films),
                UiEvent::TopActorsLoaded(actors) => self.home.on_top_actors(actors),
                UiEvent::ActorDetailLoaded(detail) => self.home.on_actor_detail(detail),
                UiEvent::FilmsLoaded(films) => self.films.on_films_loaded(films),
                UiEvent::FilmDetailLoaded(film) => self.films.on_detail_loaded(film),
                UiEvent::CustomersLoaded(page) => self.customers.on_page_loaded(page),
                UiEvent::CustomerDetailLoaded(detail) => self.customers.on_detail_loaded(detail),
                UiEvent::CustomerMutationCompleted(kind) => {
                    self.status = match kind {
                        CustomerMutation::Added => "Customer added".to_string(),
                        CustomerMutation::Edited => "Customer updated".to_string(),
                        CustomerMutation::Deleted => "Customer deleted".to_string(),
                    };
                    let refresh = self.customers.on_mutation_completed();
                    self.dispatch(refresh);
                }
                UiEvent::RentalReturned { customer_id } => {
                    self.status = "Rental marked returned".to_string();
                    let refresh = self.customers.on_rental_returned(customer_id);
                    self.dispatch(refresh);
                }
                UiEvent::Error(err) => {
                    self.status = err.status_line();
                    match err.context() {
                        UiErrorContext::TopLists => self.home.on_fetch_failed(),
                        UiErrorContext::FilmSearch => self.films.on_search_failed(),
                        UiErrorContext::CustomerSearch => self.customers.on_search_failed(),
                        UiErrorContext::BackendStartup
                        | UiErrorContext::ActorDetail
                        | UiErrorContext::FilmDetail
                        | UiErrorContext::CustomerDetail
                        | UiErrorContext::CustomerMutation
                        | UiErrorContext::RentalReturn => {}
                    }
                }
            }
        }
    }

    fn show_nav(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Sakila Rental Admin");
                ui.separator();
                for page in [Page::Home, Page::Films, Page::Customers] {
                    if ui
                        .selectable_label(self.page == page, page.label())
                        .clicked()
                        && self.page != page
                    {
                        self.page = page;
                        // Page state is transient: navigation discards it and
                        // the destination starts from a fresh fetch.
                        match page {
                            Page::Home => self.home = HomeState::default(),
                            Page::Films => self.films = FilmsState::default(),
                            Page::Customers => self.customers = CustomersState::default(),
                        }
                    }
                }
            });
        });
    }

    fn show_status_line(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });
    }
}

impl eframe::App for AdminGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_nav(ctx);
        self.show_status_line(ctx);

        let commands = match self.page {
            Page::Home => {
                let mut commands = self.home.ensure_started();
                egui::CentralPanel::default().show(ctx, |ui| {
                    commands.extend(ui::home::show(ui, &mut self.home));
                });
                commands
            }
            Page::Films => {
                let mut commands = Vec::new();
                commands.extend(self.films.ensure_started());
                egui::CentralPanel::default().show(ctx, |ui| {
                    commands.extend(ui::films::show(ui, &mut self.films));
                });
                commands
            }
            Page::Customers => {
                let mut commands = Vec::new();
                commands.extend(self.customers.ensure_started());
                egui::CentralPanel::default().show(ctx, |ui| {
                    commands.extend(ui::customers::show(ui, &mut self.customers));
                });
                commands
            }
        };
        self.dispatch_all(commands);

        // Backend events arrive off-thread; poll again soon even without input.
        ctx.request_repaint_after(std::time::Duration::from_millis(200));
    }
}
