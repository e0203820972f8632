//! Postgres persistence for the filmotheka catalog.
//!
//! - [`models`] -- row types and request DTOs.
//! - [`repositories`] -- zero-sized repositories with async CRUD methods.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Bound on a single attempt to obtain a connection.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// How often, and how patiently, the initial connection is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectRetry {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for ConnectRetry {
    /// Ten attempts five seconds apart, enough for a database container that
    /// is still starting.
    fn default() -> Self {
        Self {
            attempts: 10,
            delay: Duration::from_secs(5),
        }
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

/// [`create_pool`], retried per `retry`. Returns the last error once the
/// attempts are exhausted.
pub async fn create_pool_with_retry(
    database_url: &str,
    max_connections: u32,
    retry: ConnectRetry,
) -> Result<DbPool, sqlx::Error> {
    let attempts = retry.attempts.max(1);
    let mut attempt = 1;
    loop {
        match create_pool(database_url, max_connections).await {
            Ok(pool) => return Ok(pool),
            Err(e) if attempt < attempts => {
                tracing::warn!(
                    attempt,
                    attempts,
                    error = %e,
                    retry_in_secs = retry.delay.as_secs_f64(),
                    "Database not reachable yet"
                );
                tokio::time::sleep(retry.delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Round-trip a trivial query to prove the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
