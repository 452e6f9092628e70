//! User endpoints

use axum::{Json, extract::State, http::StatusCode};
use error::{MessageResponse, Paginated, Result};

use crate::{
    AppState,
    dto::users::{CreateUserRequest, UpdateUserRequest, UserDetailResponse, UserListQuery, UserResponse},
    extract::{ApiJson, ApiPath, ApiQuery},
    services::users,
};

pub(super) async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let user = users::create_user(&state, req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub(super) async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UserListQuery>,
) -> Result<Json<Paginated<UserResponse>>> {
    Ok(Json(users::list_users(&state, query).await?))
}

pub(super) async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<UserDetailResponse>> {
    Ok(Json(users::get_user(&state, id).await?))
}

pub(super) async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>> {
    Ok(Json(users::update_user(&state, id, req).await?))
}

pub(super) async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<MessageResponse>> {
    Ok(Json(users::delete_user(&state, id).await?))
}
