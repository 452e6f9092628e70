//! # Task CC Member Service
//!
//! Users copied on a task. A (task, user) pair appears at most once.

use entity::{TaskCcMembers, Users, task_cc_members, users};
use error::{AppError, MessageResponse, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
    QueryFilter,
    QueryOrder,
    Set,
    TransactionTrait,
    sea_query::OnConflict,
};
use tracing::{debug, info};

use crate::{
    AppState,
    dto::{
        UserSummary,
        cc_members::{AddCcMemberRequest, BulkAddCcMembersRequest, CcMemberResponse},
    },
    services::{on_unique_violation, tasks::find_task, users::find_user},
    validation::ValidateRequest,
};

fn already_member() -> AppError { AppError::already_member("User is already a CC member for this task") }

async fn members_of<C: ConnectionTrait>(db: &C, task_id: i32) -> Result<Vec<CcMemberResponse>> {
    let rows = TaskCcMembers::find()
        .filter(task_cc_members::Column::TaskId.eq(task_id))
        .order_by_asc(task_cc_members::Column::Id)
        .find_also_related(Users)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(member, user)| {
            CcMemberResponse {
                member,
                user: user.map(UserSummary::from),
            }
        })
        .collect())
}

/// Add one user to a task's CC list
pub async fn add_cc_member(state: &AppState, task_id: i32, req: AddCcMemberRequest) -> Result<CcMemberResponse> {
    req.check()?;

    let txn = state.db.begin().await?;
    find_task(&txn, task_id).await?;
    let user = find_user(&txn, req.user_id).await?;

    let existing = TaskCcMembers::find()
        .filter(task_cc_members::Column::TaskId.eq(task_id))
        .filter(task_cc_members::Column::UserId.eq(req.user_id))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(already_member());
    }

    let member = task_cc_members::ActiveModel {
        task_id: Set(task_id),
        user_id: Set(req.user_id),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| on_unique_violation(e, already_member))?;
    txn.commit().await?;

    info!(task_id, user_id = req.user_id, member_id = member.id, "CC member added");
    Ok(CcMemberResponse {
        member,
        user: Some(user.into()),
    })
}

/// Add many users at once and return the task's full CC list.
///
/// Unknown users and existing members are skipped; the result is the complete
/// list whether or not anything was inserted.
pub async fn add_cc_members_bulk(
    state: &AppState,
    task_id: i32,
    req: BulkAddCcMembersRequest,
) -> Result<Vec<CcMemberResponse>> {
    let requested = req.distinct_ids();

    let txn = state.db.begin().await?;
    find_task(&txn, task_id).await?;

    let (known, existing) = if requested.is_empty() {
        (Vec::new(), Vec::new())
    }
    else {
        let known: Vec<i32> = Users::find()
            .filter(users::Column::Id.is_in(requested.clone()))
            .all(&txn)
            .await?
            .into_iter()
            .map(|u| u.id)
            .collect();
        let existing: Vec<i32> = TaskCcMembers::find()
            .filter(task_cc_members::Column::TaskId.eq(task_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|m| m.user_id)
            .collect();
        (known, existing)
    };

    let unknown: Vec<i32> = requested
        .iter()
        .copied()
        .filter(|id| !known.contains(id))
        .collect();
    if !unknown.is_empty() {
        debug!(task_id, ?unknown, "Skipping unknown users in bulk CC add");
    }

    let to_insert: Vec<task_cc_members::ActiveModel> = requested
        .iter()
        .copied()
        .filter(|id| known.contains(id) && !existing.contains(id))
        .map(|user_id| {
            task_cc_members::ActiveModel {
                task_id: Set(task_id),
                user_id: Set(user_id),
                ..Default::default()
            }
        })
        .collect();
    // A pair added concurrently since the read above is skipped by the index.
    let mut inserted = 0;
    if !to_insert.is_empty() {
        inserted = TaskCcMembers::insert_many(to_insert)
            .on_conflict(
                OnConflict::columns([task_cc_members::Column::TaskId, task_cc_members::Column::UserId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
    }

    let members = members_of(&txn, task_id).await?;
    txn.commit().await?;

    info!(task_id, inserted, total = members.len(), "CC members added in bulk");
    Ok(members)
}

/// List a task's CC members in insertion order
pub async fn list_cc_members(state: &AppState, task_id: i32) -> Result<Vec<CcMemberResponse>> {
    find_task(&state.db, task_id).await?;
    members_of(&state.db, task_id).await
}

/// Remove a CC member row, which must belong to `task_id`
pub async fn remove_cc_member(state: &AppState, task_id: i32, member_id: i32) -> Result<MessageResponse> {
    let txn = state.db.begin().await?;
    let member = TaskCcMembers::find_by_id(member_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found("CC member not found"))?;
    if member.task_id != task_id {
        return Err(AppError::mismatch("CC member does not belong to the specified task"));
    }

    TaskCcMembers::delete_by_id(member_id).exec(&txn).await?;
    txn.commit().await?;

    info!(task_id, member_id, user_id = member.user_id, "CC member removed");
    Ok(MessageResponse::new("CC member removed successfully"))
}
