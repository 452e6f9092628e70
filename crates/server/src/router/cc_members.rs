//! Task CC member endpoints

use axum::{Json, extract::State, http::StatusCode};
use error::{MessageResponse, Result};

use crate::{
    AppState,
    dto::cc_members::{AddCcMemberRequest, BulkAddCcMembersRequest, CcMemberResponse},
    extract::{ApiJson, ApiPath},
    services::cc_members,
};

pub(super) async fn add(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i32>,
    ApiJson(req): ApiJson<AddCcMemberRequest>,
) -> Result<(StatusCode, Json<CcMemberResponse>)> {
    let member = cc_members::add_cc_member(&state, task_id, req).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

pub(super) async fn add_bulk(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i32>,
    ApiJson(req): ApiJson<BulkAddCcMembersRequest>,
) -> Result<(StatusCode, Json<Vec<CcMemberResponse>>)> {
    let members = cc_members::add_cc_members_bulk(&state, task_id, req).await?;
    Ok((StatusCode::CREATED, Json(members)))
}

pub(super) async fn list(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i32>,
) -> Result<Json<Vec<CcMemberResponse>>> {
    Ok(Json(cc_members::list_cc_members(&state, task_id).await?))
}

pub(super) async fn remove(
    State(state): State<AppState>,
    ApiPath((task_id, member_id)): ApiPath<(i32, i32)>,
) -> Result<Json<MessageResponse>> {
    Ok(Json(cc_members::remove_cc_member(&state, task_id, member_id).await?))
}
