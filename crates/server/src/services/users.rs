//! # User Service
//!
//! User CRUD with email normalization, password hashing and dependency checks
//! before deletion.

use auth::secrecy::{ExposeSecret, SecretString};
use chrono::Utc;
use entity::{Comments, TaskCcMembers, Tasks, Users, comments, task_cc_members, tasks, users};
use error::{AppError, MessageResponse, Paginated, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    Condition,
    ConnectionTrait,
    EntityTrait,
    PaginatorTrait,
    QueryFilter,
    QueryOrder,
    Set,
    TransactionTrait,
    sea_query::{Expr, Func, LikeExpr},
};
use tracing::{debug, info};

use crate::{
    AppState,
    dto::users::{CreateUserRequest, UpdateUserRequest, UserDetailResponse, UserListQuery, UserResponse},
    services::{fetch_page, on_unique_violation},
    utils::contains_pattern,
    validation::{ValidateRequest, normalize_email},
};

/// Load a user or fail with `User not found`
pub(crate) async fn find_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<users::Model> {
    Users::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))
}

fn duplicate_email() -> AppError { AppError::duplicate_email("User with this email already exists") }

/// Fails with `DuplicateEmail` if another user already holds `email`
async fn ensure_email_available<C: ConnectionTrait>(db: &C, email: &str, exclude_id: Option<i32>) -> Result<()> {
    let mut query = Users::find().filter(users::Column::Email.eq(email));
    if let Some(id) = exclude_id {
        query = query.filter(users::Column::Id.ne(id));
    }

    if query.one(db).await?.is_some() {
        return Err(duplicate_email());
    }
    Ok(())
}

fn hash(state: &AppState, password: String) -> Result<String> {
    let hashed = auth::hash_password(&SecretString::from(password), Some(state.password_config))
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;
    Ok(hashed.expose_secret().to_string())
}

/// Create a user. The email is stored trimmed and lower-cased and the password
/// is stored as an Argon2id hash.
pub async fn create_user(state: &AppState, req: CreateUserRequest) -> Result<UserResponse> {
    req.check()?;

    let email = normalize_email(&req.email);
    let password = hash(state, req.password)?;

    let txn = state.db.begin().await?;
    ensure_email_available(&txn, &email, None).await?;

    let user = users::ActiveModel {
        name: Set(req.name.trim().to_string()),
        email: Set(email),
        password: Set(password),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| on_unique_violation(e, duplicate_email))?;
    txn.commit().await?;

    info!(user_id = %user.id, "User created");
    Ok(user.into())
}

/// List users newest first, optionally filtered by a name/email substring
pub async fn list_users(state: &AppState, query: UserListQuery) -> Result<Paginated<UserResponse>> {
    let mut select = Users::find();

    if let Some(pattern) = query.search.as_deref().and_then(contains_pattern) {
        let name = Expr::expr(Func::lower(Expr::col((Users, users::Column::Name))));
        let email = Expr::expr(Func::lower(Expr::col((Users, users::Column::Email))));
        select = select.filter(
            Condition::any()
                .add(name.like(LikeExpr::new(pattern.clone()).escape('\\')))
                .add(email.like(LikeExpr::new(pattern).escape('\\'))),
        );
    }

    let select = select
        .order_by_desc(users::Column::CreatedAt)
        .order_by_desc(users::Column::Id);
    let (items, pagination) = fetch_page(select, &state.db, query.page_request()).await?;

    Ok(Paginated::new(items, pagination).map(UserResponse::from))
}

/// Get a user with the tasks assigned to and created by them
pub async fn get_user(state: &AppState, user_id: i32) -> Result<UserDetailResponse> {
    let user = find_user(&state.db, user_id).await?;

    let assigned_tasks = Tasks::find()
        .filter(tasks::Column::AssigneeId.eq(user_id))
        .order_by_asc(tasks::Column::Id)
        .all(&state.db)
        .await?;
    let created_tasks = Tasks::find()
        .filter(tasks::Column::CreatedBy.eq(user_id))
        .order_by_asc(tasks::Column::Id)
        .all(&state.db)
        .await?;

    Ok(UserDetailResponse {
        user:           user.into(),
        assigned_tasks: assigned_tasks.into_iter().map(Into::into).collect(),
        created_tasks:  created_tasks.into_iter().map(Into::into).collect(),
    })
}

/// Update the supplied fields of a user
pub async fn update_user(state: &AppState, user_id: i32, req: UpdateUserRequest) -> Result<UserResponse> {
    req.check()?;

    let password = req
        .password
        .map(|password| hash(state, password))
        .transpose()?;

    let txn = state.db.begin().await?;
    let mut active: users::ActiveModel = find_user(&txn, user_id).await?.into();

    if let Some(name) = req.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(email) = req.email {
        let email = normalize_email(&email);
        ensure_email_available(&txn, &email, Some(user_id)).await?;
        active.email = Set(email);
    }
    if let Some(password) = password {
        active.password = Set(password);
    }

    let user = if active.is_changed() {
        active
            .update(&txn)
            .await
            .map_err(|e| on_unique_violation(e, duplicate_email))?
    }
    else {
        find_user(&txn, user_id).await?
    };
    txn.commit().await?;

    info!(user_id = %user.id, "User updated");
    Ok(user.into())
}

/// Delete a user that has no assigned tasks, created tasks or comments.
///
/// CC memberships are removed in the same transaction.
pub async fn delete_user(state: &AppState, user_id: i32) -> Result<MessageResponse> {
    let txn = state.db.begin().await?;
    find_user(&txn, user_id).await?;

    let assigned = Tasks::find()
        .filter(tasks::Column::AssigneeId.eq(user_id))
        .count(&txn)
        .await?;
    let created = Tasks::find()
        .filter(tasks::Column::CreatedBy.eq(user_id))
        .count(&txn)
        .await?;
    let authored = Comments::find()
        .filter(comments::Column::UserId.eq(user_id))
        .count(&txn)
        .await?;

    if assigned + created + authored > 0 {
        return Err(AppError::has_dependents(format!(
            "Cannot delete user with {} assigned tasks, {} created tasks, and {} comments",
            assigned, created, authored
        )));
    }

    let memberships = TaskCcMembers::delete_many()
        .filter(task_cc_members::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    Users::delete_by_id(user_id).exec(&txn).await?;
    txn.commit().await?;

    debug!(user_id, cc_memberships = memberships.rows_affected, "Removed user memberships");
    info!(user_id, "User deleted");
    Ok(MessageResponse::new("User deleted successfully"))
}
