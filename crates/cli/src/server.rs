//! # CLI Server
//!
//! Server startup and shutdown for the Taskflow CLI.

use std::net::SocketAddr;

use error::{AppError, Result};
use migration::{Migrator, MigratorTrait as _, seeds::run_all_seeds};
use server::{AppState, create_app_router};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{
    commands::ServeArgs,
    config::{DatabaseConfig, parse_socket_addr},
};

/// Connects, migrates, seeds and serves the API until a shutdown signal arrives
pub async fn serve(config: &DatabaseConfig, args: &ServeArgs) -> Result<()> {
    info!(target: "serve", "Starting API server...");

    let address = parse_socket_addr(&args.host, args.port)
        .map_err(|e| AppError::config(format!("Invalid address {}:{}: {}", args.host, args.port, e)))?;

    info!(target: "serve", database = %config.redacted_target(), "Connecting to database...");
    let db = config
        .connection_settings()
        .connect()
        .await
        .map_err(|e| AppError::database(format!("Failed to connect to database: {}", e)))?;

    info!(target: "serve", "Running database migrations...");
    Migrator::up(&db, None)
        .await
        .map_err(|e| AppError::migration(format!("Failed to run database migrations: {}", e)))?;

    if args.no_seed {
        info!(target: "serve", "Skipping seed data");
    }
    else {
        for result in run_all_seeds(&db, false).await? {
            info!(
                target: "serve",
                seed = %result.seed_name,
                inserted = result.inserted_count,
                duration_ms = result.duration_ms,
                "Seed applied"
            );
        }
    }

    let state = AppState::new(db);
    serve_http(create_app_router(state.clone()), address).await?;

    info!(target: "serve", uptime_secs = state.uptime_secs(), "Server stopped");
    Ok(())
}

async fn serve_http(app: axum::Router, address: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", address, e)))?;

    info!(target: "serve", %address, "Listening for HTTP requests");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {}", e)))
}

/// Waits for shutdown signals (Ctrl+C or SIGTERM)
///
/// A handler that cannot be installed is logged and never fires.
#[allow(
    clippy::integer_division_remainder_used,
    reason = "tokio::select! macro triggers false positive"
)]
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(target: "serve", error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                warn!(target: "serve", error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(target: "serve", "Received shutdown signal");
}
