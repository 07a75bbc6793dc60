use super::*;
use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use shared::protocol::{Customer, Rental, RentalStatus, TopMovie};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

async fn spawn_api_server(app: Router) -> Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}/api"))
}

#[derive(Clone)]
struct CaptureState<T> {
    tx: Arc<Mutex<Option<oneshot::Sender<T>>>>,
}

fn capture_channel<T>() -> (CaptureState<T>, oneshot::Receiver<T>) {
    let (tx, rx) = oneshot::channel();
    (
        CaptureState {
            tx: Arc::new(Mutex::new(Some(tx))),
        },
        rx,
    )
}

impl<T> CaptureState<T> {
    async fn record(&self, value: T) {
        if let Some(tx) = self.tx.lock().await.take() {
            let _ = tx.send(value);
        }
    }
}

fn sample_customer_page() -> CustomerSearchPage {
    CustomerSearchPage {
        items: vec![Customer {
            customer_id: CustomerId(12),
            first_name: Some("MARY".to_string()),
            last_name: Some("SMITH".to_string()),
            email: Some("mary.smith@sakilacustomer.org".to_string()),
            active: Some(1),
            create_date: Some("2006-02-14 22:04:36".to_string()),
            store_id: Some(1),
            address_id: Some(5),
        }],
        has_next: true,
    }
}

async fn handle_customer_search(
    State(state): State<CaptureState<HashMap<String, String>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<CustomerSearchPage> {
    state.record(params).await;
    Json(sample_customer_page())
}

#[tokio::test]
async fn customer_search_sends_mode_query_and_page_params() {
    let (state, rx) = capture_channel();
    let app = Router::new()
        .route("/api/customers/search", get(handle_customer_search))
        .with_state(state);
    let base_url = spawn_api_server(app).await.expect("spawn server");

    let client = RentalApiClient::new(base_url);
    let page = client
        .search_customers(CustomerSearchBy::LastName, "Smith", 1, 25)
        .await
        .expect("search");

    let params = rx.await.expect("params");
    assert_eq!(params.get("by").map(String::as_str), Some("last_name"));
    assert_eq!(params.get("q").map(String::as_str), Some("Smith"));
    assert_eq!(params.get("page").map(String::as_str), Some("1"));
    assert_eq!(params.get("page_size").map(String::as_str), Some("25"));

    assert!(page.has_next);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].customer_id, CustomerId(12));
    assert_eq!(page.items[0].last_name.as_deref(), Some("SMITH"));
}

#[tokio::test]
async fn blank_query_is_omitted_and_nonblank_query_is_trimmed() {
    let captured: Arc<Mutex<Vec<HashMap<String, String>>>> = Arc::new(Mutex::new(Vec::new()));
    let captured_handler = Arc::clone(&captured);
    let app = Router::new().route(
        "/api/films/search",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let captured = Arc::clone(&captured_handler);
            async move {
                captured.lock().await.push(params);
                Json(Vec::<Film>::new())
            }
        }),
    );
    let base_url = spawn_api_server(app).await.expect("spawn server");
    let client = RentalApiClient::new(base_url);

    client
        .search_films(FilmSearchBy::All, "   ")
        .await
        .expect("blank search");
    client
        .search_films(FilmSearchBy::Actor, "  GUINESS  ")
        .await
        .expect("trimmed search");

    let captured = captured.lock().await;
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].get("by").map(String::as_str), Some("all"));
    assert!(!captured[0].contains_key("q"));
    assert_eq!(captured[1].get("by").map(String::as_str), Some("actor"));
    assert_eq!(captured[1].get("q").map(String::as_str), Some("GUINESS"));
}

#[tokio::test]
async fn film_detail_fetches_by_id_path() {
    let (state, rx) = capture_channel();
    let app = Router::new()
        .route(
            "/api/films/:id",
            get(
                |State(state): State<CaptureState<i64>>, Path(id): Path<i64>| async move {
                    state.record(id).await;
                    Json(Film {
                        film_id: FilmId(id),
                        title: "ACADEMY DINOSAUR".to_string(),
                        description: Some("A Epic Drama of a Feminist And a Mad Scientist".to_string()),
                        release_year: Some(2006),
                        length: Some(86),
                        rating: Some("PG".to_string()),
                        category: Some("Documentary".to_string()),
                        actors: None,
                        rental_count: Some(32),
                    })
                },
            ),
        )
        .with_state(state);
    let base_url = spawn_api_server(app).await.expect("spawn server");

    let client = RentalApiClient::new(base_url);
    let film = client.film_detail(FilmId(42)).await.expect("detail");

    assert_eq!(rx.await.expect("id"), 42);
    assert_eq!(film.film_id, FilmId(42));
    assert_eq!(film.title, "ACADEMY DINOSAUR");
    assert_eq!(film.release_year, Some(2006));
    assert_eq!(film.rental_count, Some(32));
}

#[tokio::test]
async fn actor_detail_parses_top_movies() {
    let app = Router::new().route(
        "/api/actors/:id",
        get(|Path(id): Path<i64>| async move {
            Json(ActorDetail {
                actor_id: ActorId(id),
                first_name: "PENELOPE".to_string(),
                last_name: "GUINESS".to_string(),
                film_count: Some(19),
                top_movies: vec![TopMovie {
                    film_id: FilmId(1),
                    title: "ACADEMY DINOSAUR".to_string(),
                    rental_count: Some(32),
                }],
            })
        }),
    );
    let base_url = spawn_api_server(app).await.expect("spawn server");

    let client = RentalApiClient::new(base_url);
    let detail = client.actor_detail(ActorId(1)).await.expect("detail");
    assert_eq!(detail.film_count, Some(19));
    assert_eq!(detail.top_movies.len(), 1);
    assert_eq!(detail.top_movies[0].title, "ACADEMY DINOSAUR");
}

#[tokio::test]
async fn top_listings_parse_film_and_actor_rows() {
    let app = Router::new()
        .route(
            "/api/films/top-rented",
            get(|| async {
                Json(vec![Film {
                    film_id: FilmId(103),
                    title: "BUCKET BROTHERHOOD".to_string(),
                    description: None,
                    release_year: None,
                    length: None,
                    rating: None,
                    category: None,
                    actors: None,
                    rental_count: Some(34),
                }])
            }),
        )
        .route(
            "/api/actors/top",
            get(|| async {
                Json(vec![ActorSummary {
                    actor_id: ActorId(107),
                    first_name: "GINA".to_string(),
                    last_name: "DEGENERES".to_string(),
                    film_count: Some(42),
                }])
            }),
        );
    let base_url = spawn_api_server(app).await.expect("spawn server");
    let client = RentalApiClient::new(base_url);

    let films = client.top_rented_films().await.expect("top films");
    assert_eq!(films.len(), 1);
    assert_eq!(films[0].film_id, FilmId(103));

    let actors = client.top_actors().await.expect("top actors");
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].last_name, "DEGENERES");
}

#[tokio::test]
async fn add_customer_posts_whole_form_as_json_body() {
    let (state, rx) = capture_channel();
    let app = Router::new()
        .route(
            "/api/customers/add",
            post(
                |State(state): State<CaptureState<CustomerForm>>,
                 Json(form): Json<CustomerForm>| async move {
                    state.record(form).await;
                    StatusCode::CREATED
                },
            ),
        )
        .with_state(state);
    let base_url = spawn_api_server(app).await.expect("spawn server");

    let form = CustomerForm {
        first_name: "MARY".to_string(),
        last_name: "SMITH".to_string(),
        email: "mary.smith@sakilacustomer.org".to_string(),
        ..CustomerForm::default()
    };
    RentalApiClient::new(base_url)
        .add_customer(&form)
        .await
        .expect("add");

    assert_eq!(rx.await.expect("form"), form);
}

#[tokio::test]
async fn mutations_hit_expected_method_and_path() {
    let captured: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let edit_log = Arc::clone(&captured);
    let delete_log = Arc::clone(&captured);
    let return_log = Arc::clone(&captured);
    let app = Router::new()
        .route(
            "/api/customers/edit/:id",
            put(move |Path(id): Path<i64>| {
                let log = Arc::clone(&edit_log);
                async move { log.lock().await.push(format!("edit:{id}")) }
            }),
        )
        .route(
            "/api/customers/delete/:id",
            delete(move |Path(id): Path<i64>| {
                let log = Arc::clone(&delete_log);
                async move { log.lock().await.push(format!("delete:{id}")) }
            }),
        )
        .route(
            "/api/customers/return/:id",
            put(move |Path(id): Path<i64>| {
                let log = Arc::clone(&return_log);
                async move { log.lock().await.push(format!("return:{id}")) }
            }),
        );
    let base_url = spawn_api_server(app).await.expect("spawn server");
    let client = RentalApiClient::new(base_url);

    client
        .edit_customer(CustomerId(12), &CustomerForm::default())
        .await
        .expect("edit");
    client.delete_customer(CustomerId(12)).await.expect("delete");
    client.return_rental(RentalId(77)).await.expect("return");

    let captured = captured.lock().await;
    assert_eq!(*captured, vec!["edit:12", "delete:12", "return:77"]);
}

#[tokio::test]
async fn non_2xx_status_becomes_an_error() {
    let app = Router::new().route(
        "/api/customers/search",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base_url = spawn_api_server(app).await.expect("spawn server");

    let err = RentalApiClient::new(base_url)
        .search_customers(CustomerSearchBy::All, "", 1, 25)
        .await
        .expect_err("must fail");
    assert!(err.to_string().contains("500"), "unexpected error: {err}");
}

#[tokio::test]
async fn customer_detail_parses_rental_history() {
    let app = Router::new().route(
        "/api/customers/:id",
        get(|Path(id): Path<i64>| async move {
            Json(CustomerDetail {
                customer: Customer {
                    customer_id: CustomerId(id),
                    first_name: Some("MARY".to_string()),
                    last_name: Some("SMITH".to_string()),
                    email: None,
                    active: Some(1),
                    create_date: None,
                    store_id: None,
                    address_id: None,
                },
                rentals: vec![
                    Rental {
                        rental_id: RentalId(77),
                        film_id: Some(FilmId(42)),
                        title: Some("ALIEN CENTER".to_string()),
                        rating: Some("NC-17".to_string()),
                        rental_date: Some("2005-05-25 11:30:37".to_string()),
                        return_date: None,
                        status: Some(RentalStatus::Active),
                    },
                    Rental {
                        rental_id: RentalId(78),
                        film_id: None,
                        title: None,
                        rating: None,
                        rental_date: None,
                        return_date: Some("2005-06-01 09:00:00".to_string()),
                        status: Some(RentalStatus::Returned),
                    },
                ],
            })
        }),
    );
    let base_url = spawn_api_server(app).await.expect("spawn server");

    let detail = RentalApiClient::new(base_url)
        .customer_detail(CustomerId(12))
        .await
        .expect("detail");
    assert_eq!(detail.customer.customer_id, CustomerId(12));
    assert_eq!(detail.rentals.len(), 2);
    assert_eq!(detail.rentals[0].status, Some(RentalStatus::Active));
    assert!(detail.rentals[0].return_date.is_none());
}

#[test]
fn base_url_trailing_slash_is_normalized() {
    let client = RentalApiClient::new("http://localhost:5000/api/");
    assert_eq!(client.base_url(), "http://localhost:5000/api");
}
