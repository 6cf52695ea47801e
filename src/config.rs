//! Application configuration loaded from environment variables.
//!
//! ## Required Variables
//!
//! - `DATABASE_URL` - PostgreSQL connection string
//! - `STORAGE_BASE_URL` - base URL of the hosted storage service
//! - `STORAGE_API_KEY` - bearer key for blob uploads
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - log filter (default: `info`)
//! - `DB_MAX_CONNECTIONS` - pool size (default: 10)
//! - `DB_CONNECT_TIMEOUT` - pool acquire timeout in seconds (default: 30)
//!
//! A `.env` file is honored when present.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub storage_base_url: String,
    pub storage_api_key: String,
    pub log_level: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from the environment (and `.env` if present).
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let storage_base_url =
            env::var("STORAGE_BASE_URL").context("STORAGE_BASE_URL must be set")?;
        let storage_api_key =
            env::var("STORAGE_API_KEY").context("STORAGE_API_KEY must be set")?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            storage_base_url,
            storage_api_key,
            log_level,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Connects a PostgreSQL pool using the configured limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable.
    pub async fn connect_pool(&self) -> Result<PgPool> {
        PgPoolOptions::new()
            .max_connections(self.db_max_connections)
            .acquire_timeout(Duration::from_secs(self.db_connect_timeout))
            .connect(&self.database_url)
            .await
            .context("Failed to connect to PostgreSQL")
    }
}

/// Installs the global tracing subscriber, honoring `RUST_LOG`.
///
/// Falls back to `level` when no filter is set in the environment. Safe to
/// call once per process; embedding applications that install their own
/// subscriber should skip it.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_database_url_is_an_error() {
        // Only meaningful when the variable is absent; skip otherwise rather
        // than mutating process-global env from a test.
        if env::var("DATABASE_URL").is_err() {
            assert!(Config::from_env().is_err());
        }
    }
}
