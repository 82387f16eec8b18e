//! PostgreSQL connection settings.
//!
//! The datastore is addressed either by discrete parameters (host, port,
//! user, password, database name) or by a single connection URL, which
//! takes precedence when present.
//!
//! The pool connects lazily: an unreachable server does not fail start-up,
//! each storage call fails after the acquire timeout instead.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use thiserror::Error;

/// Default database name.
pub const DEFAULT_DATABASE: &str = "fee";

/// Default maximum time to wait for a pooled connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur while building or opening the connection pool.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Invalid database URL: {0}")]
    InvalidUrl(String),

    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
}

/// Connection parameters for the PostgreSQL datastore.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Full connection URL; overrides the discrete parameters when set.
    pub url: Option<String>,
    /// How long a storage call waits for a connection before failing.
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: String::new(),
            database: DEFAULT_DATABASE.into(),
            url: None,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl DbConfig {
    /// Build sqlx connect options from the configured parameters.
    pub fn connect_options(&self) -> Result<PgConnectOptions, DbError> {
        if let Some(url) = self.url.as_deref().filter(|u| !u.trim().is_empty()) {
            return PgConnectOptions::from_str(url).map_err(|e| DbError::InvalidUrl(e.to_string()));
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        Ok(options)
    }

    /// Human-readable target for logs (never includes the password).
    pub fn redacted(&self) -> String {
        match self.url.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(_) => "<DATABASE_URL>".to_string(),
            None => format!(
                "{}@{}:{}/{}",
                self.user, self.host, self.port, self.database
            ),
        }
    }

    /// Build the pool shared by every request handler without opening a
    /// connection. Only malformed settings fail here.
    pub fn connect_lazy(&self, max_connections: u32) -> Result<PgPool, DbError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect_lazy_with(self.connect_options()?);
        Ok(pool)
    }
}
