//! # Logging Configuration
//!
//! Configuration for the logging subsystem.
//! Supports environment variables and programmatic configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Logging configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Log level or filter directive (debug, info, `server=debug,sea_orm=warn`)
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (json, pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,

    /// Optional log file path, rotated daily
    #[serde(default)]
    pub log_file: Option<String>,

    /// Environment (development, testing, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_level() -> String { "info".to_string() }

fn default_format() -> String { "json".to_string() }

fn default_environment() -> String { "development".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level:       default_level(),
            format:      default_format(),
            log_file:    None,
            environment: default_environment(),
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables.
    ///
    /// `RUST_LOG`, `TASKFLOW_LOG_FORMAT` and `TASKFLOW_LOG_FILE` override the
    /// arguments; `TASKFLOW_ENV` names the deployment environment.
    pub fn from_env(level: &str, format: &str, log_file: Option<&str>) -> Self {
        Self {
            level:       std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
            format:      std::env::var("TASKFLOW_LOG_FORMAT").unwrap_or_else(|_| format.to_string()),
            log_file:    std::env::var("TASKFLOW_LOG_FILE")
                .ok()
                .or(log_file.map(|s| s.to_string())),
            environment: std::env::var("TASKFLOW_ENV").unwrap_or_else(|_| default_environment()),
        }
    }

    /// Build the level filter, falling back to `info` on an unparsable directive.
    pub fn filter(&self) -> EnvFilter { EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info")) }

    /// Build the tracing subscriber from this configuration.
    pub fn build(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        match self.format.as_str() {
            "pretty" => self.build_pretty_subscriber(),
            "compact" => self.build_compact_subscriber(),
            _ => self.build_json_subscriber(),
        }
    }

    /// Build a JSON subscriber for production logging.
    fn build_json_subscriber(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let stdout = fmt::layer()
            .json()
            .with_timer(fmt::time::UtcTime::rfc_3339());

        if let Some(ref log_file) = self.log_file {
            let path = Path::new(log_file);
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "taskflow.log".to_string());

            let file_layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_writer(tracing_appender::rolling::daily(directory, file_name));
            Box::new(
                Registry::default()
                    .with(self.filter())
                    .with(stdout)
                    .with(file_layer),
            )
        }
        else {
            Box::new(Registry::default().with(self.filter()).with(stdout))
        }
    }

    /// Build a pretty subscriber for development logging.
    fn build_pretty_subscriber(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let subscriber = fmt::layer()
            .pretty()
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(Registry::default().with(self.filter()).with(subscriber))
    }

    /// Build a compact subscriber for terminals and CI.
    fn build_compact_subscriber(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let subscriber = fmt::layer()
            .compact()
            .with_timer(fmt::time::UtcTime::rfc_3339());
        Box::new(Registry::default().with(self.filter()).with(subscriber))
    }
}
