//! # Task Data Transfer Objects
//!
//! Request and response types for task endpoints.

use chrono::NaiveDate;
use entity::{
    sea_orm_active_enums::{TaskPriority, TaskType},
    task_status,
    tasks,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{PageRequest, UserSummary, cc_members::CcMemberResponse, comments::CommentResponse, double_option};
use crate::validation::{ValidateRequest, validate_title};

/// Request to create a task
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[serde(rename = "type")]
    pub task_type:   TaskType,
    #[validate(custom(function = validate_title))]
    pub title:       String,
    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: Option<String>,
    pub priority:    TaskPriority,
    /// Task status id (default: 1)
    pub status:      Option<i32>,
    pub assignee_id: Option<i32>,
    pub due_date:    Option<NaiveDate>,
    pub is_read:     Option<bool>,
    pub created_by:  Option<i32>,
}

impl ValidateRequest for CreateTaskRequest {
    const FIELD_ORDER: &'static [&'static str] = &["title", "description"];
}

/// Partial task update.
///
/// Nullable columns accept an explicit `null` to clear the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[serde(rename = "type")]
    pub task_type:   Option<TaskType>,
    #[validate(custom(function = validate_title))]
    pub title:       Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: Option<Option<String>>,
    pub priority:    Option<TaskPriority>,
    pub status:      Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub assignee_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date:    Option<Option<NaiveDate>>,
    pub is_read:     Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub created_by:  Option<Option<i32>>,
}

impl ValidateRequest for UpdateTaskRequest {
    const FIELD_ORDER: &'static [&'static str] = &["title", "description"];
}

/// Query parameters for task list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskListQuery {
    /// Page number (1-based, default: 1)
    pub page:        Option<u64>,
    /// Items per page (default: 10, max: 100)
    pub limit:       Option<u64>,
    /// Filter by status id
    pub status:      Option<i32>,
    /// Filter by priority
    pub priority:    Option<TaskPriority>,
    /// Filter by task type
    #[serde(rename = "type")]
    pub task_type:   Option<TaskType>,
    /// Filter by assignee
    pub assignee_id: Option<i32>,
}

impl TaskListQuery {
    pub fn page_request(&self) -> PageRequest { PageRequest::new(self.page, self.limit) }
}

/// Task fields embedded in user details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub id:        i32,
    pub title:     String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub priority:  TaskPriority,
    pub status:    i32,
    pub due_date:  Option<NaiveDate>,
}

impl From<tasks::Model> for TaskSummary {
    fn from(task: tasks::Model) -> Self {
        Self {
            id:        task.id,
            title:     task.title,
            task_type: task.task_type,
            priority:  task.priority,
            status:    task.status,
            due_date:  task.due_date,
        }
    }
}

/// Task row in a list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListItem {
    #[serde(flatten)]
    pub task:          tasks::Model,
    pub assignee:      Option<UserSummary>,
    pub cc_member_ids: Vec<i32>,
    pub comment_ids:   Vec<i32>,
}

/// Task with its full graph of related rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetailResponse {
    #[serde(flatten)]
    pub task:        tasks::Model,
    pub assignee:    Option<UserSummary>,
    pub creator:     Option<UserSummary>,
    pub task_status: Option<task_status::Model>,
    /// Newest first
    pub comments:    Vec<CommentResponse>,
    pub cc_members:  Vec<CcMemberResponse>,
}
