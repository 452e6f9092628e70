//! # Database Migrator
//!
//! Implements the Sea-ORM migrator trait for the task tracker schema.
//! Tables are created parents first so every foreign key has a target.

use sea_orm_migration::prelude::*;

use crate::{
    m20250101_000001_create_users_table,
    m20250101_000002_create_task_status_table,
    m20250101_000003_create_tasks_table,
    m20250101_000004_create_task_cc_members_table,
    m20250101_000005_create_comments_table,
};

/// The main migrator that coordinates all migration operations
///
/// # Example
///
/// ```rust,ignore
/// use migration::{Migrator, MigratorTrait};
///
/// Migrator::up(&db, None).await?;
/// ```
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Migrations are executed in the order they appear in this list.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_table::Migration),
            Box::new(m20250101_000002_create_task_status_table::Migration),
            Box::new(m20250101_000003_create_tasks_table::Migration),
            Box::new(m20250101_000004_create_task_cc_members_table::Migration),
            Box::new(m20250101_000005_create_comments_table::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_count() {
        assert_eq!(Migrator::migrations().len(), 5);
    }

    #[test]
    fn test_migrations_are_ordered_by_name() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
