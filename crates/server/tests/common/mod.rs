//! # Common Test Utilities
//!
//! Shared test infrastructure: an in-memory SQLite database migrated and
//! seeded per test, plus fixtures for every resource.

#![allow(dead_code)]

use std::sync::Once;

use auth::PasswordConfig;
use entity::{
    comments,
    sea_orm_active_enums::{TaskPriority, TaskType},
    task_cc_members,
    task_status,
    tasks,
};
use migration::{ConnectionSettings, Migrator, MigratorTrait, seeds::run_all_seeds};
use sea_orm::{ActiveModelTrait, Set};
use server::{
    AppState,
    dto::{
        tasks::{CreateTaskRequest, TaskDetailResponse},
        users::{CreateUserRequest, UserResponse},
    },
    services,
};

/// Password that satisfies the complexity rule
pub const TEST_PASSWORD: &str = "Secret123";

/// Initialize test logging (run once per test session)
static INIT: Once = Once::new();

/// Initialize test environment including structured logging
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Fresh application state over a migrated and seeded in-memory database.
///
/// Seeding creates the statuses `To Do` (id 1), `In Progress` (2) and `Done` (3).
pub async fn test_state() -> AppState {
    init_test_env();

    let db = ConnectionSettings::new("sqlite::memory:")
        .connect()
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    run_all_seeds(&db, false)
        .await
        .expect("Failed to seed task statuses");

    AppState::new(db).with_password_config(PasswordConfig::low_cost())
}

pub fn user_request(name: &str, email: &str) -> CreateUserRequest {
    CreateUserRequest {
        name:     name.to_string(),
        email:    email.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

pub async fn create_user(state: &AppState, name: &str, email: &str) -> UserResponse {
    services::users::create_user(state, user_request(name, email))
        .await
        .expect("Failed to create user")
}

pub fn task_request(title: &str) -> CreateTaskRequest {
    CreateTaskRequest {
        task_type:   TaskType::Task,
        title:       title.to_string(),
        description: None,
        priority:    TaskPriority::Medium,
        status:      None,
        assignee_id: None,
        due_date:    None,
        is_read:     None,
        created_by:  None,
    }
}

pub async fn create_task(state: &AppState, title: &str) -> TaskDetailResponse {
    services::tasks::create_task(state, task_request(title))
        .await
        .expect("Failed to create task")
}

/// Insert a task row directly, bypassing the service
pub async fn insert_task(
    state: &AppState,
    title: &str,
    status: i32,
    assignee_id: Option<i32>,
    created_by: Option<i32>,
) -> tasks::Model {
    let now = chrono::Utc::now();
    tasks::ActiveModel {
        task_type: Set(TaskType::Ticket),
        title: Set(title.to_string()),
        description: Set(None),
        priority: Set(TaskPriority::Low),
        status: Set(status),
        assignee_id: Set(assignee_id),
        due_date: Set(None),
        is_read: Set(false),
        created_by: Set(created_by),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .expect("Failed to insert task")
}

pub async fn insert_status(state: &AppState, name: &str) -> task_status::Model {
    task_status::ActiveModel {
        status_type: Set("Ticket".to_string()),
        status_name: Set(name.to_string()),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .expect("Failed to insert status")
}

pub async fn insert_cc_member(state: &AppState, task_id: i32, user_id: i32) -> task_cc_members::Model {
    task_cc_members::ActiveModel {
        task_id: Set(task_id),
        user_id: Set(user_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .expect("Failed to insert CC member")
}

pub async fn insert_comment(state: &AppState, task_id: i32, user_id: Option<i32>, text: &str) -> comments::Model {
    comments::ActiveModel {
        task_id: Set(task_id),
        user_id: Set(user_id),
        comment_text: Set(text.to_string()),
        is_read: Set(false),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .expect("Failed to insert comment")
}
