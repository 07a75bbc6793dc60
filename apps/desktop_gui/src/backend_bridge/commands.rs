//! Backend commands queued from UI to backend worker.

use shared::{
    domain::{ActorId, CustomerId, CustomerSearchBy, FilmId, FilmSearchBy, RentalId},
    protocol::CustomerForm,
};

pub enum BackendCommand {
    FetchTopFilms,
    FetchTopActors,
    FetchActorDetail {
        actor_id: ActorId,
    },
    SearchFilms {
        by: FilmSearchBy,
        query: String,
    },
    FetchFilmDetail {
        film_id: FilmId,
    },
    SearchCustomers {
        by: CustomerSearchBy,
        query: String,
        page: u32,
        page_size: u32,
    },
    FetchCustomerDetail {
        customer_id: CustomerId,
    },
    AddCustomer {
        form: CustomerForm,
    },
    EditCustomer {
        customer_id: CustomerId,
        form: CustomerForm,
    },
    DeleteCustomer {
        customer_id: CustomerId,
    },
    /// Mark a rental returned; `customer_id` identifies the open detail
    /// view to re-fetch afterwards.
    ReturnRental {
        rental_id: RentalId,
        customer_id: CustomerId,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchTopFilms => "fetch_top_films",
            Self::FetchTopActors => "fetch_top_actors",
            Self::FetchActorDetail { .. } => "fetch_actor_detail",
            Self::SearchFilms { .. } => "search_films",
            Self::FetchFilmDetail { .. } => "fetch_film_detail",
            Self::SearchCustomers { .. } => "search_customers",
            Self::FetchCustomerDetail { .. } => "fetch_customer_detail",
            Self::AddCustomer { .. } => "add_customer",
            Self::EditCustomer { .. } => "edit_customer",
            Self::DeleteCustomer { .. } => "delete_customer",
            Self::ReturnRental { .. } => "return_rental",
        }
    }
}
