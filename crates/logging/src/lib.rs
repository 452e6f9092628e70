//! # Taskflow Logging Infrastructure
//!
//! Structured logging utilities for the task tracker.
//! Provides tracing integration with JSON output and environment-based configuration.

pub mod config;
pub mod macros;
pub mod request_id;

pub use config::LoggingConfig;
pub use request_id::{RequestId, REQUEST_ID_HEADER};
// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Initialize the logging system.
///
/// # Arguments
///
/// * `level` - Log level or filter directive (debug, info, `server=debug`)
/// * `format` - Output format (json, pretty, compact)
/// * `log_file` - Optional path to log file
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(
    level: &str,
    format: &str,
    log_file: Option<&str>,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    init_with_config(LoggingConfig::from_env(level, format, log_file))
}

/// Initialize logging with a custom configuration.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_with_config(config: LoggingConfig) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = config.build();
    tracing::subscriber::set_global_default(subscriber)?;
    info!(
        level = %config.level,
        format = %config.format,
        environment = %config.environment,
        log_file = ?config.log_file,
        "Logging initialized"
    );
    Ok(())
}
