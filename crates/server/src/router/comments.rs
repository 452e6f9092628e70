//! Task comment endpoints

use axum::{Json, extract::State, http::StatusCode};
use error::{MessageResponse, Paginated, Result};

use crate::{
    AppState,
    dto::{
        PageQuery,
        comments::{CommentResponse, CreateCommentRequest, UpdateCommentRequest},
    },
    extract::{ApiJson, ApiPath, ApiQuery},
    services::comments,
};

pub(super) async fn create(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i32>,
    ApiJson(req): ApiJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>)> {
    let comment = comments::create_comment(&state, task_id, req).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub(super) async fn list(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<Paginated<CommentResponse>>> {
    Ok(Json(comments::list_comments(&state, task_id, query).await?))
}

pub(super) async fn get(
    State(state): State<AppState>,
    ApiPath((task_id, comment_id)): ApiPath<(i32, i32)>,
) -> Result<Json<CommentResponse>> {
    Ok(Json(comments::get_comment(&state, task_id, comment_id).await?))
}

pub(super) async fn update(
    State(state): State<AppState>,
    ApiPath((task_id, comment_id)): ApiPath<(i32, i32)>,
    ApiJson(req): ApiJson<UpdateCommentRequest>,
) -> Result<Json<CommentResponse>> {
    Ok(Json(comments::update_comment(&state, task_id, comment_id, req).await?))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    ApiPath((task_id, comment_id)): ApiPath<(i32, i32)>,
) -> Result<Json<MessageResponse>> {
    Ok(Json(comments::delete_comment(&state, task_id, comment_id).await?))
}
