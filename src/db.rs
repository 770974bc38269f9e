//! SQLite pool construction and schema setup.
//!
//! The schema ships as plain SQL under `migrations/` and is applied with
//! `sqlx::raw_sql` at startup. Statements are idempotent (`IF NOT EXISTS`),
//! so re-applying on every boot is safe.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Open (or create) the SQLite database and build a connection pool.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the database file cannot be opened or the pool
/// cannot connect.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    info!(path = %config.path, "database pool connected");
    Ok(pool)
}

/// Apply the bundled schema migrations to the pool.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if a migration statement fails.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(include_str!("../migrations/001_contacts.sql"))
        .execute(pool)
        .await?;
    info!("schema migrations applied");
    Ok(())
}
