//! # Task Status Service

use entity::{TaskStatus, Tasks, task_status, tasks};
use error::{AppError, MessageResponse, Paginated, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
    PaginatorTrait,
    QueryFilter,
    QueryOrder,
    Set,
    TransactionTrait,
};
use tracing::info;

use crate::{
    AppState,
    dto::task_statuses::{CreateTaskStatusRequest, TaskStatusListQuery, UpdateTaskStatusRequest},
    services::{fetch_page, on_unique_violation},
    validation::ValidateRequest,
};

async fn find_status<C: ConnectionTrait>(db: &C, status_id: i32) -> Result<task_status::Model> {
    TaskStatus::find_by_id(status_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Task status not found"))
}

fn duplicate_name() -> AppError { AppError::duplicate_status_name("Status with this name already exists") }

/// Fails with `DuplicateStatusName` when another status already uses `name`
async fn ensure_name_available<C: ConnectionTrait>(db: &C, name: &str, exclude_id: Option<i32>) -> Result<()> {
    let mut query = TaskStatus::find().filter(task_status::Column::StatusName.eq(name));
    if let Some(id) = exclude_id {
        query = query.filter(task_status::Column::Id.ne(id));
    }

    if query.one(db).await?.is_some() {
        return Err(duplicate_name());
    }
    Ok(())
}

pub async fn create_task_status(state: &AppState, req: CreateTaskStatusRequest) -> Result<task_status::Model> {
    req.check()?;

    let name = req.status_name.trim().to_string();
    let txn = state.db.begin().await?;
    ensure_name_available(&txn, &name, None).await?;

    let status = task_status::ActiveModel {
        status_type: Set(req.status_type.trim().to_string()),
        status_name: Set(name),
        is_active: Set(req.is_active.unwrap_or(true)),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| on_unique_violation(e, duplicate_name))?;
    txn.commit().await?;

    info!(status_id = %status.id, status_name = %status.status_name, "Task status created");
    Ok(status)
}

pub async fn list_task_statuses(state: &AppState, query: TaskStatusListQuery) -> Result<Paginated<task_status::Model>> {
    let mut select = TaskStatus::find();
    if let Some(status_type) = query.status_type.as_deref() {
        select = select.filter(task_status::Column::StatusType.eq(status_type));
    }

    let (items, pagination) = fetch_page(
        select.order_by_asc(task_status::Column::Id),
        &state.db,
        query.page_request(),
    )
    .await?;
    Ok(Paginated::new(items, pagination))
}

pub async fn get_task_status(state: &AppState, status_id: i32) -> Result<task_status::Model> {
    find_status(&state.db, status_id).await
}

/// Update the supplied fields; the name must stay unique among the other statuses
pub async fn update_task_status(
    state: &AppState,
    status_id: i32,
    req: UpdateTaskStatusRequest,
) -> Result<task_status::Model> {
    req.check()?;

    let txn = state.db.begin().await?;
    let mut active: task_status::ActiveModel = find_status(&txn, status_id).await?.into();

    if let Some(name) = req.status_name {
        let name = name.trim().to_string();
        ensure_name_available(&txn, &name, Some(status_id)).await?;
        active.status_name = Set(name);
    }
    if let Some(status_type) = req.status_type {
        active.status_type = Set(status_type.trim().to_string());
    }
    if let Some(is_active) = req.is_active {
        active.is_active = Set(is_active);
    }

    let status = if active.is_changed() {
        active
            .update(&txn)
            .await
            .map_err(|e| on_unique_violation(e, duplicate_name))?
    }
    else {
        find_status(&txn, status_id).await?
    };
    txn.commit().await?;

    info!(status_id, "Task status updated");
    Ok(status)
}

/// Delete a status that no task references
pub async fn delete_task_status(state: &AppState, status_id: i32) -> Result<MessageResponse> {
    let txn = state.db.begin().await?;
    find_status(&txn, status_id).await?;

    let in_use = Tasks::find()
        .filter(tasks::Column::Status.eq(status_id))
        .count(&txn)
        .await?;
    if in_use > 0 {
        return Err(AppError::has_dependents(format!(
            "Cannot delete status that is being used by {} tasks",
            in_use
        )));
    }

    TaskStatus::delete_by_id(status_id).exec(&txn).await?;
    txn.commit().await?;

    info!(status_id, "Task status deleted");
    Ok(MessageResponse::new("Task status deleted successfully"))
}
