//! # Database Connection Management
//!
//! Connection settings and helpers for opening a pooled Sea-ORM connection.
//! PostgreSQL is the production target; SQLite is supported for local runs and tests.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Full database URL (`postgres://...` or `sqlite:...`)
    pub url:             String,
    /// Maximum connections in pool
    pub pool_size:       u32,
    /// Connection timeout in seconds
    pub connect_timeout: u64,
    /// Whether sqlx should log every statement
    pub sqlx_logging:    bool,
}

impl ConnectionSettings {
    /// Creates settings for the given URL with default pool options
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            url:             url.to_string(),
            pool_size:       10,
            connect_timeout: 30,
            sqlx_logging:    false,
        }
    }

    /// Sets the maximum pool size
    #[must_use]
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size.max(1);
        self
    }

    /// Sets the connection timeout in seconds
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: u64) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Enables or disables sqlx statement logging
    #[must_use]
    pub fn with_sqlx_logging(mut self, enabled: bool) -> Self {
        self.sqlx_logging = enabled;
        self
    }

    /// Returns true if the URL points at an in-memory SQLite database
    pub fn is_in_memory(&self) -> bool { self.url.contains(":memory:") || self.url.contains("mode=memory") }

    /// Builds the Sea-ORM connect options
    ///
    /// An in-memory SQLite database lives inside a single connection, so the
    /// pool is pinned to one connection in that case.
    pub fn connect_options(&self) -> ConnectOptions {
        let pool_size = if self.is_in_memory() { 1 } else { self.pool_size };

        let mut options = ConnectOptions::new(self.url.clone());
        options
            .max_connections(pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(self.connect_timeout))
            .sqlx_logging(self.sqlx_logging);
        options
    }

    /// Opens the connection pool
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached.
    pub async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        tracing::debug!(pool_size = self.pool_size, in_memory = self.is_in_memory(), "Opening database pool");
        Database::connect(self.connect_options()).await
    }
}
