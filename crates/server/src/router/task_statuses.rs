//! Task status endpoints

use axum::{Json, extract::State, http::StatusCode};
use entity::task_status;
use error::{MessageResponse, Paginated, Result};

use crate::{
    AppState,
    dto::task_statuses::{CreateTaskStatusRequest, TaskStatusListQuery, UpdateTaskStatusRequest},
    extract::{ApiJson, ApiPath, ApiQuery},
    services::task_statuses,
};

pub(super) async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateTaskStatusRequest>,
) -> Result<(StatusCode, Json<task_status::Model>)> {
    let status = task_statuses::create_task_status(&state, req).await?;
    Ok((StatusCode::CREATED, Json(status)))
}

pub(super) async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TaskStatusListQuery>,
) -> Result<Json<Paginated<task_status::Model>>> {
    Ok(Json(task_statuses::list_task_statuses(&state, query).await?))
}

pub(super) async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<task_status::Model>> {
    Ok(Json(task_statuses::get_task_status(&state, id).await?))
}

pub(super) async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateTaskStatusRequest>,
) -> Result<Json<task_status::Model>> {
    Ok(Json(task_statuses::update_task_status(&state, id, req).await?))
}

pub(super) async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<MessageResponse>> {
    Ok(Json(task_statuses::delete_task_status(&state, id).await?))
}
