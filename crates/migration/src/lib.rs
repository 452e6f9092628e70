//! # Taskflow Migrations
//!
//! Schema migrations, connection helpers and seed data for the task tracker database.

pub use sea_orm_migration::prelude::*;

pub mod db;
mod m20250101_000001_create_users_table;
mod m20250101_000002_create_task_status_table;
mod m20250101_000003_create_tasks_table;
mod m20250101_000004_create_task_cc_members_table;
mod m20250101_000005_create_comments_table;
mod migrator;
pub mod seeds;

pub use db::ConnectionSettings;
pub use migrator::Migrator;
