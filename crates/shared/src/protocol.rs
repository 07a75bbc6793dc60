//! Wire DTOs for the rental REST API.
//!
//! The server shape is trusted: beyond the id and the primary display
//! field, everything is optional and defaulted so a sparse record still
//! deserializes and renders.

use serde::{Deserialize, Serialize};

use crate::domain::{ActorId, CustomerId, FilmId, RentalId};

/// One film record. The search listing and `/films/{id}` detail share this
/// loose shape; absent columns stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    pub film_id: FilmId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Denormalized comma-separated actor names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSummary {
    pub actor_id: ActorId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub film_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopMovie {
    pub film_id: FilmId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_count: Option<i64>,
}

/// `/actors/{id}` response: the summary plus the actor's most rented films.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorDetail {
    pub actor_id: ActorId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub film_count: Option<i64>,
    #[serde(default)]
    pub top_movies: Vec<TopMovie>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 0/1 integer flag, as stored server-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<i64>,
    /// Opaque server timestamp string; parsed best-effort at render time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_id: Option<i64>,
}

/// One page of `/customers/search` results. `has_next` is server-computed;
/// the client never knows the total count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerSearchPage {
    #[serde(default)]
    pub items: Vec<Customer>,
    #[serde(default)]
    pub has_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    Active,
    Returned,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    pub rental_id: RentalId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub film_id: Option<FilmId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_date: Option<String>,
    /// Null until the rental is marked returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RentalStatus>,
}

/// `/customers/{id}` response: the customer record plus rental history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDetail {
    #[serde(flatten)]
    pub customer: Customer,
    #[serde(default)]
    pub rentals: Vec<Rental>,
}

/// Mutable form state shared by the add and edit panels; posted whole as
/// the JSON body of `/customers/add` and `/customers/edit/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub store_id: i64,
    pub address_id: i64,
    pub active: i64,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            store_id: 1,
            address_id: 1,
            active: 1,
        }
    }
}

impl CustomerForm {
    /// Seed the form from a listed row, the way the edit panel opens.
    /// Store/address are not displayed in the list, so they fall back to
    /// their defaults rather than round-tripping hidden columns.
    pub fn seeded_from(customer: &Customer) -> Self {
        Self {
            first_name: customer.first_name.clone().unwrap_or_default(),
            last_name: customer.last_name.clone().unwrap_or_default(),
            email: customer.email.clone().unwrap_or_default(),
            store_id: 1,
            address_id: 1,
            active: customer.active.unwrap_or(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_film_record_deserializes_with_defaults() {
        let film: Film =
            serde_json::from_str(r#"{"film_id": 42, "title": "ACADEMY DINOSAUR"}"#).unwrap();
        assert_eq!(film.film_id, FilmId(42));
        assert_eq!(film.title, "ACADEMY DINOSAUR");
        assert!(film.description.is_none());
        assert!(film.release_year.is_none());
        assert!(film.rental_count.is_none());
    }

    #[test]
    fn customer_page_defaults_to_empty_without_items_or_has_next() {
        let page: CustomerSearchPage = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_next);

        let page: CustomerSearchPage =
            serde_json::from_str(r#"{"items": [{"customer_id": 7}], "has_next": true}"#).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].customer_id, CustomerId(7));
        assert!(page.has_next);
    }

    #[test]
    fn customer_detail_flattens_customer_and_defaults_rentals() {
        let detail: CustomerDetail = serde_json::from_str(
            r#"{"customer_id": 3, "first_name": "MARY", "last_name": "SMITH"}"#,
        )
        .unwrap();
        assert_eq!(detail.customer.customer_id, CustomerId(3));
        assert_eq!(detail.customer.first_name.as_deref(), Some("MARY"));
        assert!(detail.rentals.is_empty());
    }

    #[test]
    fn rental_status_parses_wire_strings() {
        let rental: Rental = serde_json::from_str(
            r#"{"rental_id": 9, "title": "ALIEN CENTER", "status": "active", "return_date": null}"#,
        )
        .unwrap();
        assert_eq!(rental.status, Some(RentalStatus::Active));
        assert!(rental.return_date.is_none());

        let rental: Rental =
            serde_json::from_str(r#"{"rental_id": 9, "status": "returned"}"#).unwrap();
        assert_eq!(rental.status, Some(RentalStatus::Returned));
    }

    #[test]
    fn actor_detail_defaults_top_movies() {
        let detail: ActorDetail = serde_json::from_str(
            r#"{"actor_id": 1, "first_name": "PENELOPE", "last_name": "GUINESS"}"#,
        )
        .unwrap();
        assert!(detail.top_movies.is_empty());
    }

    #[test]
    fn edit_form_seeds_from_row_and_add_form_resets_to_defaults() {
        let customer = Customer {
            customer_id: CustomerId(12),
            first_name: Some("MARY".to_string()),
            last_name: Some("SMITH".to_string()),
            email: None,
            active: Some(0),
            create_date: None,
            store_id: Some(2),
            address_id: Some(5),
        };

        let form = CustomerForm::seeded_from(&customer);
        assert_eq!(form.first_name, "MARY");
        assert_eq!(form.last_name, "SMITH");
        assert_eq!(form.email, "");
        assert_eq!(form.active, 0);
        assert_eq!(form.store_id, 1);

        assert_eq!(
            CustomerForm::default(),
            CustomerForm {
                first_name: String::new(),
                last_name: String::new(),
                email: String::new(),
                store_id: 1,
                address_id: 1,
                active: 1,
            }
        );
    }
}
