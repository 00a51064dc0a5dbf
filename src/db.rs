//! Postgres pool setup, idempotent schema bootstrap, and per-request sessions.

use anyhow::{Context, Result};
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Postgres;
use tracing::info;

/// One unit of interaction with the backing store. The connection returns
/// to the pool when this guard is dropped, on every exit path.
pub type Session = PoolConnection<Postgres>;

pub async fn init_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .context("failed to connect to database")?;

    Ok(pool)
}

/// Creates the `items` table and its name index if they do not exist.
pub async fn create_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            price BIGINT NOT NULL,
            quantity BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create items table")?;

    sqlx::query("CREATE INDEX IF NOT EXISTS items_name_idx ON items (name)")
        .execute(pool)
        .await
        .context("failed to create items name index")?;

    info!("Database schema initialized");
    Ok(())
}

/// Checks one session out of the pool for the duration of a request.
pub async fn session(pool: &PgPool) -> Result<Session, sqlx::Error> {
    pool.acquire().await
}
