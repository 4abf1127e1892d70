//! Database connection pool, migrations and the per-request connection.
//!
//! This module provides utilities for:
//! - Creating and managing a SQLite connection pool
//! - Running database migrations automatically
//! - Handing each HTTP request its own pooled connection ([`DbConn`])

use std::str::FromStr;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sqlx::{
    Pool, Sqlite,
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::error::AppError;

/// Type alias for the SQLite connection pool shared as router state.
pub type DbPool = Pool<Sqlite>;

/// Create a new SQLite connection pool.
///
/// The database file is created when it does not exist yet.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (e.g. `sqlite:creditos.db`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the database file
/// cannot be opened.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_opts)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Applied migrations are tracked in the `_sqlx_migrations` table, so calling
/// this on every startup is safe: the `creditos` table is created once.
///
/// # Errors
///
/// Returns an error if a migration fails to apply or an already applied
/// migration was modified.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro embeds ./migrations at compile time
    sqlx::migrate!("./migrations").run(pool).await
}

/// A pooled connection bound to the lifetime of one HTTP request.
///
/// Acquired when the handler's arguments are extracted and returned to the
/// pool when the handler finishes, whether it succeeded, rejected the input
/// or failed with a storage error.
pub struct DbConn(pub PoolConnection<Sqlite>);

impl<S> FromRequestParts<S> for DbConn
where
    DbPool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = DbPool::from_ref(state);
        let conn = pool.acquire().await?;

        Ok(Self(conn))
    }
}
