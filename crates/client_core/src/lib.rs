use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{ActorId, CustomerId, CustomerSearchBy, FilmId, FilmSearchBy, RentalId},
    protocol::{
        ActorDetail, ActorSummary, CustomerDetail, CustomerForm, CustomerSearchPage, Film,
    },
};
use tracing::debug;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Backend seam for everything the UI can ask of the rental API.
///
/// Implemented by [`RentalApiClient`] over HTTP and by in-process stubs in
/// tests, so the GUI bridge can be driven without a live server.
#[async_trait]
pub trait RentalBackend: Send + Sync {
    async fn top_rented_films(&self) -> Result<Vec<Film>>;
    async fn top_actors(&self) -> Result<Vec<ActorSummary>>;
    async fn actor_detail(&self, actor_id: ActorId) -> Result<ActorDetail>;
    async fn search_films(&self, by: FilmSearchBy, query: &str) -> Result<Vec<Film>>;
    async fn film_detail(&self, film_id: FilmId) -> Result<Film>;
    async fn search_customers(
        &self,
        by: CustomerSearchBy,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<CustomerSearchPage>;
    async fn customer_detail(&self, customer_id: CustomerId) -> Result<CustomerDetail>;
    async fn add_customer(&self, form: &CustomerForm) -> Result<()>;
    async fn edit_customer(&self, customer_id: CustomerId, form: &CustomerForm) -> Result<()>;
    async fn delete_customer(&self, customer_id: CustomerId) -> Result<()>;
    async fn return_rental(&self, rental_id: RentalId) -> Result<()>;
}

/// Thin HTTP client over the rental REST API.
///
/// One request per call, parsed JSON or an error via `?`. No retry, no
/// caching, no auth, no timeout; non-2xx statuses surface through
/// `error_for_status`.
pub struct RentalApiClient {
    http: Client,
    base_url: String,
}

impl RentalApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `by` is always sent; `q` only when the trimmed query is non-empty.
    fn search_query(by: &'static str, query: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![("by", by.to_string())];
        let trimmed = query.trim();
        if !trimmed.is_empty() {
            params.push(("q", trimmed.to_string()));
        }
        params
    }
}

#[async_trait]
impl RentalBackend for RentalApiClient {
    async fn top_rented_films(&self) -> Result<Vec<Film>> {
        let films = self
            .http
            .get(format!("{}/films/top-rented", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(films)
    }

    async fn top_actors(&self) -> Result<Vec<ActorSummary>> {
        let actors = self
            .http
            .get(format!("{}/actors/top", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(actors)
    }

    async fn actor_detail(&self, actor_id: ActorId) -> Result<ActorDetail> {
        let detail = self
            .http
            .get(format!("{}/actors/{}", self.base_url, actor_id.0))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(detail)
    }

    async fn search_films(&self, by: FilmSearchBy, query: &str) -> Result<Vec<Film>> {
        debug!(by = by.as_str(), query, "api: search_films");
        let films = self
            .http
            .get(format!("{}/films/search", self.base_url))
            .query(&Self::search_query(by.as_str(), query))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(films)
    }

    async fn film_detail(&self, film_id: FilmId) -> Result<Film> {
        let film = self
            .http
            .get(format!("{}/films/{}", self.base_url, film_id.0))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(film)
    }

    async fn search_customers(
        &self,
        by: CustomerSearchBy,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<CustomerSearchPage> {
        debug!(by = by.as_str(), query, page, page_size, "api: search_customers");
        let mut params = Self::search_query(by.as_str(), query);
        params.push(("page", page.to_string()));
        params.push(("page_size", page_size.to_string()));
        let page = self
            .http
            .get(format!("{}/customers/search", self.base_url))
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page)
    }

    async fn customer_detail(&self, customer_id: CustomerId) -> Result<CustomerDetail> {
        let detail = self
            .http
            .get(format!("{}/customers/{}", self.base_url, customer_id.0))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(detail)
    }

    async fn add_customer(&self, form: &CustomerForm) -> Result<()> {
        self.http
            .post(format!("{}/customers/add", self.base_url))
            .json(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn edit_customer(&self, customer_id: CustomerId, form: &CustomerForm) -> Result<()> {
        self.http
            .put(format!("{}/customers/edit/{}", self.base_url, customer_id.0))
            .json(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_customer(&self, customer_id: CustomerId) -> Result<()> {
        self.http
            .delete(format!(
                "{}/customers/delete/{}",
                self.base_url, customer_id.0
            ))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn return_rental(&self, rental_id: RentalId) -> Result<()> {
        self.http
            .put(format!("{}/customers/return/{}", self.base_url, rental_id.0))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
