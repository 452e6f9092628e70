//! # Taskflow CLI
//!
//! Command-line interface for the Taskflow task tracker API.
//!
//! ## Usage
//!
//! ```bash
//! taskflow serve    # Start the API server (runs migrations and seeds automatically)
//! taskflow migrate  # Run database migrations
//! taskflow --help   # Show help
//! ```

mod commands;
mod config;
mod server;

use clap::{CommandFactory as _, Parser};
use commands::Commands;
use config::DatabaseConfig;
use error::{AppError, Result};

/// Taskflow - task tracking REST API
#[derive(Parser, Debug)]
#[command(name = "taskflow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level or filter directive (debug, info, `server=debug`)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info", global = true)]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "TASKFLOW_LOG_FORMAT", default_value = "json", global = true)]
    log_format: String,

    /// Also write JSON logs to this file, rotated daily
    #[arg(long, env = "TASKFLOW_LOG_FILE", global = true)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Commands::Completions(args) = &cli.command {
        return commands::completions::completions(args.shell, &mut Cli::command(), &mut std::io::stdout());
    }

    logging::init(&cli.log_level, &cli.log_format, cli.log_file.as_deref())
        .map_err(|e| AppError::config(format!("Failed to initialize logging: {}", e)))?;

    logging::info!(target: "app", command = ?cli.command, "Taskflow CLI starting...");

    match cli.command {
        Commands::Serve(args) => server::serve(&database_config()?, &args).await?,
        Commands::Migrate(args) => commands::migrate::migrate(&database_config()?, args).await?,
        Commands::Validate => commands::validate::validate()?,
        Commands::Completions(_) => {},
    }

    logging::info!(target: "app", "Taskflow CLI completed successfully");
    Ok(())
}

fn database_config() -> Result<DatabaseConfig> { DatabaseConfig::from_env().map_err(AppError::config) }
