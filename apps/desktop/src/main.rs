use anyhow::Result;
use clap::Parser;
use client_core::{RentalApiClient, RentalBackend, DEFAULT_API_BASE_URL};
use shared::domain::{CustomerSearchBy, FilmSearchBy};

/// Command-line smoke client for the rental admin API.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    api_base: String,
    /// Film search mode: all, film, actor, genre.
    #[arg(long, default_value = "all")]
    films_by: FilmSearchBy,
    /// Customer search mode: all, id, first_name, last_name.
    #[arg(long, default_value = "all")]
    customers_by: CustomerSearchBy,
    #[arg(long, default_value = "")]
    query: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let client = RentalApiClient::new(args.api_base);

    let top_films = client.top_rented_films().await?;
    println!("Top rented films: {}", serde_json::to_string_pretty(&top_films)?);

    let top_actors = client.top_actors().await?;
    println!("Top actors: {}", serde_json::to_string_pretty(&top_actors)?);

    let films = client.search_films(args.films_by, &args.query).await?;
    println!(
        "Film search by={} q='{}' -> {} rows",
        args.films_by,
        args.query.trim(),
        films.len()
    );

    let customers = client
        .search_customers(args.customers_by, &args.query, 1, 25)
        .await?;
    println!(
        "Customer search by={} q='{}' -> {} rows on page 1 (has_next={})",
        args.customers_by,
        args.query.trim(),
        customers.items.len(),
        customers.has_next
    );

    Ok(())
}
