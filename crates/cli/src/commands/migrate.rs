//! # CLI Migration Command
//!
//! Applies, previews or rolls back schema migrations.

use error::{AppError, Result};
use migration::{Migrator, MigratorTrait as _};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{commands::MigrateArgs, config::DatabaseConfig};

/// Runs database migrations
pub async fn migrate(config: &DatabaseConfig, args: MigrateArgs) -> Result<()> {
    info!(
        target: "migrate",
        dry_run = %args.dry_run,
        rollback = %args.rollback,
        database = %config.redacted_target(),
        "Running database migrations..."
    );

    let db = config
        .connection_settings()
        .connect()
        .await
        .map_err(|e| AppError::database(format!("Failed to connect to database: {}", e)))?;

    run(&db, &args).await
}

/// Executes the requested migration action on an open connection
pub async fn run(db: &DatabaseConnection, args: &MigrateArgs) -> Result<()> {
    if args.dry_run {
        let pending = pending_migrations(db).await?;
        info!(target: "migrate", pending_count = %pending.len(), "Dry run mode - nothing applied");
        for name in &pending {
            info!(target: "migrate", migration = %name, "Would apply");
        }
        return Ok(());
    }

    if args.rollback {
        info!(target: "migrate", "Rolling back the last migration...");
        Migrator::down(db, Some(1))
            .await
            .map_err(|e| AppError::migration(format!("Failed to rollback migration: {}", e)))?;
        info!(target: "migrate", "Rollback completed successfully");
        return Ok(());
    }

    Migrator::up(db, None)
        .await
        .map_err(|e| AppError::migration(format!("Failed to run migrations: {}", e)))?;

    info!(target: "migrate", "Migrations completed successfully");
    Ok(())
}

/// Names of the migrations not yet applied
pub async fn pending_migrations(db: &DatabaseConnection) -> Result<Vec<String>> {
    let pending = Migrator::get_pending_migrations(db)
        .await
        .map_err(|e| AppError::migration(format!("Failed to get pending migrations: {}", e)))?;
    Ok(pending.iter().map(|m| m.name().to_string()).collect())
}
