//! Task endpoints

use axum::{Json, extract::State, http::StatusCode};
use error::{MessageResponse, Paginated, Result};

use crate::{
    AppState,
    dto::tasks::{CreateTaskRequest, TaskDetailResponse, TaskListItem, TaskListQuery, UpdateTaskRequest},
    extract::{ApiJson, ApiPath, ApiQuery},
    services::tasks,
};

pub(super) async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskDetailResponse>)> {
    let task = tasks::create_task(&state, req).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub(super) async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TaskListQuery>,
) -> Result<Json<Paginated<TaskListItem>>> {
    Ok(Json(tasks::list_tasks(&state, query).await?))
}

pub(super) async fn get(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i32>,
) -> Result<Json<TaskDetailResponse>> {
    Ok(Json(tasks::get_task(&state, task_id).await?))
}

pub(super) async fn details(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i32>,
) -> Result<Json<TaskDetailResponse>> {
    Ok(Json(tasks::get_task_details(&state, task_id).await?))
}

pub(super) async fn update(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateTaskRequest>,
) -> Result<Json<TaskDetailResponse>> {
    Ok(Json(tasks::update_task(&state, task_id, req).await?))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i32>,
) -> Result<Json<MessageResponse>> {
    Ok(Json(tasks::delete_task(&state, task_id).await?))
}
