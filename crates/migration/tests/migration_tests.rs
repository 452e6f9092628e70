//! # Migration Tests
//!
//! Applies the schema to an in-memory SQLite database and checks the seeded reference data.

use entity::{task_status, TaskStatus};
use migration::{seeds, ConnectionSettings, Migrator, MigratorTrait, SchemaManager};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};

async fn migrated_db() -> DatabaseConnection {
    let db = ConnectionSettings::new("sqlite::memory:")
        .connect()
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None).await.expect("Failed to apply migrations");
    db
}

#[tokio::test]
async fn test_up_creates_all_tables() {
    let db = migrated_db().await;
    let manager = SchemaManager::new(&db);

    for table in ["users", "task_status", "tasks", "task_cc_members", "comments"] {
        assert!(manager.has_table(table).await.unwrap(), "missing table {table}");
    }
}

#[tokio::test]
async fn test_no_pending_migrations_after_up() {
    let db = migrated_db().await;
    let pending = Migrator::get_pending_migrations(&db).await.unwrap();
    assert!(pending.is_empty());
}

#[tokio::test]
async fn test_down_removes_tables() {
    let db = migrated_db().await;
    Migrator::down(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table("tasks").await.unwrap());
    assert!(!manager.has_table("users").await.unwrap());
}

#[tokio::test]
async fn test_seeds_default_statuses_once() {
    let db = migrated_db().await;

    let first = seeds::run_all_seeds(&db, false).await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].inserted_count, seeds::DEFAULT_TASK_STATUSES.len());
    assert!(first[0].is_success());

    let second = seeds::run_all_seeds(&db, true).await.unwrap();
    assert_eq!(second[0].inserted_count, 0);

    let count = TaskStatus::find().count(&db).await.unwrap();
    assert_eq!(count, seeds::DEFAULT_TASK_STATUSES.len() as u64);

    let first_status = TaskStatus::find()
        .order_by_asc(task_status::Column::Id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first_status.id, 1);
    assert_eq!(first_status.status_name, "To Do");
    assert!(first_status.is_active);
}
