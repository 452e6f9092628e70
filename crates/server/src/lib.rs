//! # Taskflow API Server
//!
//! Axum-based HTTP API for the task tracker.
//!
//! ## Modules
//!
//! - [`dto`]: Request/response data transfer objects
//! - [`extract`]: Extractors that reject with the standard error body
//! - [`middleware`]: HTTP middleware (request ids, tracing, CORS)
//! - [`router`]: API route configuration and handlers
//! - [`services`]: Validation, integrity checks and persistence
//! - [`validation`]: Field validators shared by request DTOs

use auth::PasswordConfig;

pub mod dto;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod services;
pub mod utils;
pub mod validation;

pub use router::create_app_router;

/// Application state shared across request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db:              sea_orm::DbConn,
    /// Argon2id parameters used when storing passwords
    pub password_config: PasswordConfig,
    /// Server start time for uptime calculation
    pub start_time:      std::time::Instant,
}

impl AppState {
    /// Creates application state with the default password hashing parameters
    #[must_use]
    pub fn new(db: sea_orm::DbConn) -> Self {
        Self {
            db,
            password_config: PasswordConfig::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Overrides the password hashing parameters
    #[must_use]
    pub fn with_password_config(mut self, password_config: PasswordConfig) -> Self {
        self.password_config = password_config;
        self
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> u64 { self.start_time.elapsed().as_secs() }
}
