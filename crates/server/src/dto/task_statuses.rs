//! # Task Status Data Transfer Objects

use serde::Deserialize;
use validator::Validate;

use super::PageRequest;
use crate::validation::{ValidateRequest, validate_status_name, validate_status_type};

/// Request to create a task status
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateTaskStatusRequest {
    #[serde(rename = "type")]
    #[validate(custom(function = validate_status_type))]
    pub status_type: String,
    #[validate(custom(function = validate_status_name))]
    pub status_name: String,
    /// Defaults to true
    pub is_active:   Option<bool>,
}

impl ValidateRequest for CreateTaskStatusRequest {
    const FIELD_ORDER: &'static [&'static str] = &["status_name", "type", "status_type"];
}

/// Partial task status update
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateTaskStatusRequest {
    #[serde(rename = "type")]
    #[validate(custom(function = validate_status_type))]
    pub status_type: Option<String>,
    #[validate(custom(function = validate_status_name))]
    pub status_name: Option<String>,
    pub is_active:   Option<bool>,
}

impl ValidateRequest for UpdateTaskStatusRequest {
    const FIELD_ORDER: &'static [&'static str] = &["status_name", "type", "status_type"];
}

/// Query parameters for task status list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskStatusListQuery {
    /// Page number (1-based, default: 1)
    pub page:        Option<u64>,
    /// Items per page (default: 10, max: 100)
    pub limit:       Option<u64>,
    /// Filter by status type
    #[serde(rename = "type")]
    pub status_type: Option<String>,
}

impl TaskStatusListQuery {
    pub fn page_request(&self) -> PageRequest { PageRequest::new(self.page, self.limit) }
}
