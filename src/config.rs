//! Application configuration management.
//!
//! Configuration is read from environment variables with the `envy` crate,
//! which deserializes them straight into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (optional): SQLite connection string, defaults to `sqlite:creditos.db`
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 5000
/// - `DATABASE_MAX_CONNECTIONS` (optional): pool size, defaults to 5
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
}

fn default_database_url() -> String {
    "sqlite:creditos.db".to_string()
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    5000
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first when present; variables already set in
    /// the process environment take precedence over it.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed into the
    /// expected type (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        // database_url -> DATABASE_URL
        envy::from_env::<Config>()
    }
}
