//! # Chairside Store
//!
//! Postgres-backed read side for the scheduling grid: technicians,
//! appointments and blocked times, exposed through the [`store::SalonStore`]
//! trait so the HTTP layer can be exercised against [`mock`] in tests.

pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

pub mod mock;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}
