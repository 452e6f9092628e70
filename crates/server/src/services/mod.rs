//! # Service Layer
//!
//! Validation, integrity checks and persistence for every resource. Handlers
//! stay thin; each multi-step mutation here runs inside one transaction.

use error::{AppError, PaginationMeta, Result, ResultExt as _};
use sea_orm::{
    ConnectionTrait,
    DbErr,
    EntityTrait,
    PaginatorTrait,
    QuerySelect,
    Select,
    SqlErr,
};

use crate::dto::PageRequest;

pub mod cc_members;
pub mod comments;
pub mod task_statuses;
pub mod tasks;
pub mod users;

/// Fetch one page of `select` together with its pagination metadata.
///
/// A page past the end yields no rows and still reports the real totals. The
/// offset is only computed for pages inside the range, so it never exceeds the
/// row count.
pub(crate) async fn fetch_page<'db, E, C>(
    select: Select<E>,
    db: &'db C,
    request: PageRequest,
) -> Result<(Vec<E::Model>, PaginationMeta)>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Sync + 'db,
{
    let total = select
        .clone()
        .count(db)
        .await
        .context("Failed to count rows")?;
    let pagination = PaginationMeta::new(request.page, request.limit, total);
    if pagination.is_past_end() {
        return Ok((Vec::new(), pagination));
    }

    let items = select
        .offset(pagination.offset())
        .limit(pagination.items_per_page)
        .all(db)
        .await
        .context("Failed to fetch page")?;
    Ok((items, pagination))
}

/// Map a unique-index violation to `conflict`; any other error stays a database error.
///
/// Two concurrent requests can both pass an existence check, so the index is
/// the final arbiter.
pub(crate) fn on_unique_violation(err: DbErr, conflict: impl FnOnce() -> AppError) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict(),
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use entity::task_status;
    use migration::{ConnectionSettings, Migrator, MigratorTrait as _};
    use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

    use super::*;

    async fn migrated_db() -> DatabaseConnection {
        let db = ConnectionSettings::new("sqlite::memory:").connect().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn insert_status(db: &DatabaseConnection, name: &str) -> std::result::Result<task_status::Model, DbErr> {
        task_status::ActiveModel {
            status_type: Set("Task".to_string()),
            status_name: Set(name.to_string()),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    #[tokio::test]
    async fn test_unique_violation_maps_to_domain_error() {
        let db = migrated_db().await;
        insert_status(&db, "Blocked").await.unwrap();

        let err = insert_status(&db, "Blocked").await.unwrap_err();
        let mapped = on_unique_violation(err, || {
            AppError::duplicate_status_name("Status with this name already exists")
        });
        assert_eq!(mapped.code(), "DUPLICATE_STATUS_NAME");
    }

    #[tokio::test]
    async fn test_other_errors_stay_database_errors() {
        let mapped = on_unique_violation(DbErr::Custom("connection reset".to_string()), || {
            AppError::duplicate_email("unused")
        });
        assert_eq!(mapped.code(), "DATABASE_ERROR");
    }

    #[tokio::test]
    async fn test_huge_page_is_empty_not_overflow() {
        let db = migrated_db().await;
        insert_status(&db, "Blocked").await.unwrap();

        let request = PageRequest::new(Some(u64::MAX / 2), Some(100));
        let (items, pagination) = fetch_page(task_status::Entity::find(), &db, request).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(pagination.total_items, 1);
        assert_eq!(pagination.total_pages, 1);
        assert_eq!(pagination.current_page, u64::MAX / 2);
    }
}
