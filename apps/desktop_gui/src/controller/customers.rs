//! Customers page state: paged search, add/edit/delete forms, and the
//! rental-history detail overlay.

use shared::{
    domain::{CustomerId, CustomerSearchBy, RentalId},
    protocol::{Customer, CustomerDetail, CustomerForm, CustomerSearchPage},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::LoadState;

pub const CUSTOMER_PAGE_SIZE: u32 = 25;

/// Which panel the shared form currently feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Add,
    Edit(CustomerId),
}

#[derive(Default)]
pub struct CustomersState {
    pub query: String,
    pub search_by: CustomerSearchBy,
    pub page: u32,
    pub has_next: bool,
    pub load: LoadState,
    pub customers: Vec<Customer>,
    pub form_target: Option<FormTarget>,
    pub form: CustomerForm,
    pub detail: Option<CustomerDetail>,
    started: bool,
}

impl CustomersState {
    pub fn ensure_started(&mut self) -> Option<BackendCommand> {
        if self.started {
            return None;
        }
        self.started = true;
        self.page = 1;
        self.load = LoadState::Loading;
        Some(self.fetch_current())
    }

    /// The command for the current mode/query/page; also what a completed
    /// mutation re-dispatches so the list reflects server state.
    pub fn fetch_current(&self) -> BackendCommand {
        BackendCommand::SearchCustomers {
            by: self.search_by,
            query: self.query.clone(),
            page: self.page.max(1),
            page_size: CUSTOMER_PAGE_SIZE,
        }
    }

    pub fn set_mode(&mut self, by: CustomerSearchBy) {
        self.search_by = by;
    }

    /// Submit always returns to page 1 for the new query.
    pub fn submit_search(&mut self) -> BackendCommand {
        self.page = 1;
        self.load = LoadState::Loading;
        self.fetch_current()
    }

    /// Reset query text and search mode and return to page 1.
    pub fn show_all(&mut self) -> BackendCommand {
        self.query.clear();
        self.search_by = CustomerSearchBy::All;
        self.page = 1;
        self.load = LoadState::Loading;
        self.fetch_current()
    }

    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.has_next
    }

    pub fn prev_page(&mut self) -> Option<BackendCommand> {
        if !self.can_prev() {
            return None;
        }
        self.page -= 1;
        self.load = LoadState::Loading;
        Some(self.fetch_current())
    }

    pub fn next_page(&mut self) -> Option<BackendCommand> {
        if !self.can_next() {
            return None;
        }
        self.page += 1;
        self.load = LoadState::Loading;
        Some(self.fetch_current())
    }

    /// Open the add panel with a fresh default form.
    pub fn open_add(&mut self) {
        self.form_target = Some(FormTarget::Add);
        self.form = CustomerForm::default();
    }

    /// Open the inline edit form seeded from the clicked row.
    pub fn open_edit(&mut self, customer: &Customer) {
        self.form_target = Some(FormTarget::Edit(customer.customer_id));
        self.form = CustomerForm::seeded_from(customer);
    }

    pub fn cancel_form(&mut self) {
        self.form_target = None;
    }

    pub fn is_editing(&self, customer_id: CustomerId) -> bool {
        self.form_target == Some(FormTarget::Edit(customer_id))
    }

    /// Post the whole form; the panel collapses when the mutation
    /// completes and the list is re-fetched.
    pub fn submit_form(&mut self) -> Option<BackendCommand> {
        match self.form_target? {
            FormTarget::Add => Some(BackendCommand::AddCustomer {
                form: self.form.clone(),
            }),
            FormTarget::Edit(customer_id) => Some(BackendCommand::EditCustomer {
                customer_id,
                form: self.form.clone(),
            }),
        }
    }

    /// No confirmation step and no undo.
    pub fn delete(&self, customer_id: CustomerId) -> BackendCommand {
        BackendCommand::DeleteCustomer { customer_id }
    }

    pub fn open_detail(&self, customer_id: CustomerId) -> BackendCommand {
        BackendCommand::FetchCustomerDetail { customer_id }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn return_rental(&self, rental_id: RentalId, customer_id: CustomerId) -> BackendCommand {
        BackendCommand::ReturnRental {
            rental_id,
            customer_id,
        }
    }

    pub fn on_page_loaded(&mut self, page: CustomerSearchPage) {
        self.has_next = page.has_next;
        self.load = if page.items.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Populated
        };
        self.customers = page.items;
    }

    pub fn on_detail_loaded(&mut self, detail: CustomerDetail) {
        self.detail = Some(detail);
    }

    /// Mutation finished server-side: collapse the form and re-fetch the
    /// same query/page.
    pub fn on_mutation_completed(&mut self) -> BackendCommand {
        self.form_target = None;
        self.load = LoadState::Loading;
        self.fetch_current()
    }

    /// Return finished server-side: re-fetch the same detail view.
    pub fn on_rental_returned(&mut self, customer_id: CustomerId) -> BackendCommand {
        BackendCommand::FetchCustomerDetail { customer_id }
    }

    pub fn on_search_failed(&mut self) {
        self.customers.clear();
        self.load = LoadState::Empty;
    }
}
