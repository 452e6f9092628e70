//! # CLI Validate Command
//!
//! Checks that the database configuration is usable before starting the server.

use error::{AppError, Result};
use tracing::info;

use crate::config::DatabaseConfig;

/// Validates the database configuration read from the environment
pub fn validate() -> Result<()> {
    let config = DatabaseConfig::from_env().map_err(AppError::config)?;
    validate_config(&config)?;

    info!(target: "validate", database = %config.redacted_target(), pool_size = config.pool_size, "Configuration is valid");
    Ok(())
}

/// Validates an already parsed configuration
///
/// Without `TASKFLOW_DATABASE_URL`, host, name and user must all be non-empty.
pub fn validate_config(config: &DatabaseConfig) -> Result<()> {
    let missing = config.missing_parts();
    if !missing.is_empty() {
        return Err(AppError::config(format!(
            "Missing required environment variables: {}",
            missing.join(", ")
        )));
    }
    Ok(())
}
