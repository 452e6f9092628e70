//! # Comment Data Transfer Objects

use entity::comments;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::UserSummary;
use crate::validation::{ValidateRequest, validate_comment_text};

/// Request to comment on a task
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(range(min = 1, message = "User ID must be a positive integer"))]
    pub user_id:      i32,
    #[validate(custom(function = validate_comment_text))]
    pub comment_text: String,
    pub is_read:      Option<bool>,
}

impl ValidateRequest for CreateCommentRequest {
    const FIELD_ORDER: &'static [&'static str] = &["user_id", "comment_text"];
}

/// Partial comment update
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(custom(function = validate_comment_text))]
    pub comment_text: Option<String>,
    pub is_read:      Option<bool>,
}

impl ValidateRequest for UpdateCommentRequest {
    const FIELD_ORDER: &'static [&'static str] = &["comment_text"];
}

/// Comment with its author; `user` is null once the author has been removed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    #[serde(flatten)]
    pub comment: comments::Model,
    pub user:    Option<UserSummary>,
}
