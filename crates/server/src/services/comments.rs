//! # Task Comment Service
//!
//! Every lookup by comment id also checks that the comment belongs to the task
//! named in the request path.

use std::collections::HashMap;

use chrono::Utc;
use entity::{Comments, Users, comments, users};
use error::{AppError, MessageResponse, Paginated, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
    ModelTrait,
    QueryFilter,
    QueryOrder,
    Set,
    TransactionTrait,
};
use tracing::info;

use crate::{
    AppState,
    dto::{
        PageQuery,
        UserSummary,
        comments::{CommentResponse, CreateCommentRequest, UpdateCommentRequest},
    },
    services::{fetch_page, tasks::find_task, users::find_user},
    validation::ValidateRequest,
};

/// Load a comment and check that it belongs to `task_id`
async fn find_comment<C: ConnectionTrait>(db: &C, task_id: i32, comment_id: i32) -> Result<comments::Model> {
    let comment = Comments::find_by_id(comment_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("Comment not found"))?;

    if comment.task_id != task_id {
        return Err(AppError::mismatch("Comment does not belong to the specified task"));
    }
    Ok(comment)
}

async fn with_author<C: ConnectionTrait>(db: &C, comment: comments::Model) -> Result<CommentResponse> {
    let user = comment.find_related(Users).one(db).await?;
    Ok(CommentResponse {
        comment,
        user: user.map(UserSummary::from),
    })
}

pub async fn create_comment(state: &AppState, task_id: i32, req: CreateCommentRequest) -> Result<CommentResponse> {
    req.check()?;

    let txn = state.db.begin().await?;
    find_task(&txn, task_id).await?;
    let user = find_user(&txn, req.user_id).await?;

    let comment = comments::ActiveModel {
        task_id: Set(task_id),
        user_id: Set(Some(user.id)),
        comment_text: Set(req.comment_text.trim().to_string()),
        is_read: Set(req.is_read.unwrap_or(false)),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    info!(task_id, comment_id = comment.id, user_id = user.id, "Comment created");
    Ok(CommentResponse {
        comment,
        user: Some(user.into()),
    })
}

/// List a task's comments, newest first
pub async fn list_comments(state: &AppState, task_id: i32, query: PageQuery) -> Result<Paginated<CommentResponse>> {
    find_task(&state.db, task_id).await?;

    let select = Comments::find()
        .filter(comments::Column::TaskId.eq(task_id))
        .order_by_desc(comments::Column::CreatedAt)
        .order_by_desc(comments::Column::Id);
    let (items, pagination) = fetch_page(select, &state.db, query.page_request()).await?;

    let author_ids: Vec<i32> = items.iter().filter_map(|c| c.user_id).collect();
    let mut authors: HashMap<i32, UserSummary> = HashMap::new();
    if !author_ids.is_empty() {
        for user in Users::find()
            .filter(users::Column::Id.is_in(author_ids))
            .all(&state.db)
            .await?
        {
            authors.insert(user.id, user.into());
        }
    }

    let responses = items
        .into_iter()
        .map(|comment| {
            CommentResponse {
                user: comment.user_id.and_then(|id| authors.get(&id).cloned()),
                comment,
            }
        })
        .collect();
    Ok(Paginated::new(responses, pagination))
}

pub async fn get_comment(state: &AppState, task_id: i32, comment_id: i32) -> Result<CommentResponse> {
    let comment = find_comment(&state.db, task_id, comment_id).await?;
    with_author(&state.db, comment).await
}

pub async fn update_comment(
    state: &AppState,
    task_id: i32,
    comment_id: i32,
    req: UpdateCommentRequest,
) -> Result<CommentResponse> {
    req.check()?;

    let txn = state.db.begin().await?;
    let comment = find_comment(&txn, task_id, comment_id).await?;
    let mut active: comments::ActiveModel = comment.clone().into();

    if let Some(text) = req.comment_text {
        active.comment_text = Set(text.trim().to_string());
    }
    if let Some(is_read) = req.is_read {
        active.is_read = Set(is_read);
    }

    let comment = if active.is_changed() {
        active.update(&txn).await?
    }
    else {
        comment
    };
    let response = with_author(&txn, comment).await?;
    txn.commit().await?;

    info!(task_id, comment_id, "Comment updated");
    Ok(response)
}

pub async fn delete_comment(state: &AppState, task_id: i32, comment_id: i32) -> Result<MessageResponse> {
    let txn = state.db.begin().await?;
    find_comment(&txn, task_id, comment_id).await?;

    Comments::delete_by_id(comment_id).exec(&txn).await?;
    txn.commit().await?;

    info!(task_id, comment_id, "Comment deleted");
    Ok(MessageResponse::new("Comment deleted successfully"))
}
