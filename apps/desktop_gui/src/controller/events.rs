//! UI/backend events and error modeling for the admin GUI controller.

use shared::{
    domain::CustomerId,
    protocol::{ActorDetail, ActorSummary, CustomerDetail, CustomerSearchPage, Film},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerMutation {
    Added,
    Edited,
    Deleted,
}

pub enum UiEvent {
    Info(String),
    TopFilmsLoaded(Vec<Film>),
    TopActorsLoaded(Vec<ActorSummary>),
    ActorDetailLoaded(ActorDetail),
    FilmsLoaded(Vec<Film>),
    FilmDetailLoaded(Film),
    CustomersLoaded(CustomerSearchPage),
    CustomerDetailLoaded(CustomerDetail),
    /// The mutation request finished; the list must be re-fetched for the
    /// current query/page to reflect server state.
    CustomerMutationCompleted(CustomerMutation),
    /// The return request finished; the open detail view must be
    /// re-fetched.
    RentalReturned { customer_id: CustomerId },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    NotFound,
    Validation,
    Unknown,
}

/// Which backend operation produced the failure; lets the UI return the
/// right page to its empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    TopLists,
    ActorDetail,
    FilmSearch,
    FilmDetail,
    CustomerSearch,
    CustomerDetail,
    CustomerMutation,
    RentalReturn,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    /// The API has no error-body contract, so classification is substring
    /// sniffing over the transport error text.
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("404") || message_lower.contains("not found") {
            UiErrorCategory::NotFound
        } else if message_lower.contains("400")
            || message_lower.contains("422")
            || message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timed out")
            || message_lower.contains("timeout")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("dns")
            || message_lower.contains("unreachable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_line(&self) -> String {
        let label = match self.category {
            UiErrorCategory::Transport => "Transport",
            UiErrorCategory::NotFound => "Not found",
            UiErrorCategory::Validation => "Validation",
            UiErrorCategory::Unknown => "Unexpected",
        };
        format!("{label} error: {}", self.message)
    }
}
