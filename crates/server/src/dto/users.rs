//! # User Data Transfer Objects
//!
//! Request and response types for user management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{PageRequest, tasks::TaskSummary};
use crate::validation::{ValidateRequest, validate_email, validate_name, validate_password};

/// Request to create a new user
#[derive(Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(custom(function = validate_name))]
    pub name:     String,
    #[validate(custom(function = validate_email))]
    pub email:    String,
    #[validate(custom(function = validate_password))]
    pub password: String,
}

impl ValidateRequest for CreateUserRequest {
    const FIELD_ORDER: &'static [&'static str] = &["name", "email", "password"];
}

// Keeps passwords out of logs.
impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Partial user update; only supplied fields are validated and changed
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(custom(function = validate_name))]
    pub name:     Option<String>,
    #[validate(custom(function = validate_email))]
    pub email:    Option<String>,
    #[validate(custom(function = validate_password))]
    pub password: Option<String>,
}

impl ValidateRequest for UpdateUserRequest {
    const FIELD_ORDER: &'static [&'static str] = &["name", "email", "password"];
}

impl std::fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Query parameters for user list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    /// Page number (1-based, default: 1)
    pub page:   Option<u64>,
    /// Items per page (default: 10, max: 100)
    pub limit:  Option<u64>,
    /// Case-insensitive substring matched against name and email
    pub search: Option<String>,
}

impl UserListQuery {
    pub fn page_request(&self) -> PageRequest { PageRequest::new(self.page, self.limit) }
}

/// User as returned by the API; the password hash is never included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id:         i32,
    pub name:       String,
    pub email:      String,
    pub created_at: DateTime<Utc>,
}

impl From<entity::users::Model> for UserResponse {
    fn from(user: entity::users::Model) -> Self {
        Self {
            id:         user.id,
            name:       user.name,
            email:      user.email,
            created_at: user.created_at,
        }
    }
}

/// Single user with the tasks assigned to and created by them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetailResponse {
    #[serde(flatten)]
    pub user:           UserResponse,
    pub assigned_tasks: Vec<TaskSummary>,
    pub created_tasks:  Vec<TaskSummary>,
}
