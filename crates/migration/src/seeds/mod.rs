//! # Seed Data Management
//!
//! Reference data the application expects to find on first start. New tasks
//! default to status `1`, so the workflow statuses are seeded into an empty table.

use std::time::Instant;

use ::error::{AppError, SeedResult};
use entity::task_status;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait};

/// Statuses inserted into an empty `task_status` table, as `(status_name, type)`
pub const DEFAULT_TASK_STATUSES: &[(&str, &str)] = &[("To Do", "Task"), ("In Progress", "Task"), ("Done", "Task")];

/// Trait for seed data providers
#[async_trait::async_trait]
pub trait SeedProvider: Send + Sync {
    /// The name of this seed
    fn name(&self) -> &str;

    /// Runs the seed operation
    ///
    /// # Errors
    ///
    /// Returns an error if the seed operation fails.
    async fn run(&self, db: &DatabaseConnection) -> Result<SeedResult, AppError>;
}

/// Seeds the default workflow statuses
#[derive(Debug, Default)]
pub struct DefaultTaskStatuses;

#[async_trait::async_trait]
impl SeedProvider for DefaultTaskStatuses {
    fn name(&self) -> &str { "default_task_statuses" }

    async fn run(&self, db: &DatabaseConnection) -> Result<SeedResult, AppError> {
        let started = Instant::now();

        let txn = db.begin().await?;
        let existing = task_status::Entity::find().count(&txn).await?;
        if existing > 0 {
            return Ok(SeedResult::success(self.name(), 0, elapsed_ms(started)));
        }

        for (status_name, status_type) in DEFAULT_TASK_STATUSES {
            task_status::ActiveModel {
                status_type: Set((*status_type).to_string()),
                status_name: Set((*status_name).to_string()),
                is_active: Set(true),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
        txn.commit().await?;

        Ok(SeedResult::success(
            self.name(),
            DEFAULT_TASK_STATUSES.len(),
            elapsed_ms(started),
        ))
    }
}

fn elapsed_ms(started: Instant) -> u64 { u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX) }

/// Runs all registered seed providers
///
/// # Errors
///
/// Returns an error if any seed operation fails.
pub async fn run_all_seeds(db: &DatabaseConnection, verbose: bool) -> Result<Vec<SeedResult>, AppError> {
    let providers: Vec<Box<dyn SeedProvider>> = vec![Box::new(DefaultTaskStatuses)];
    let mut results = Vec::with_capacity(providers.len());

    for provider in providers {
        let result = provider.run(db).await?;
        if verbose {
            tracing::info!(
                seed = %result.seed_name,
                inserted = result.inserted_count,
                duration_ms = result.duration_ms,
                "Seed applied"
            );
        }
        results.push(result);
    }

    Ok(results)
}
