//! # Data Transfer Objects
//!
//! Request payloads, query parameters and response shapes for every endpoint.

use serde::{Deserialize, Deserializer, Serialize};

pub mod cc_members;
pub mod comments;
pub mod task_statuses;
pub mod tasks;
pub mod users;

/// Page size used when `limit` is omitted
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Largest accepted page size
pub const MAX_PAGE_SIZE: u64 = 100;

/// Normalized pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number (1-based)
    pub page:  u64,
    /// Items per page
    pub limit: u64,
}

impl PageRequest {
    /// Apply defaults: page 1, limit 10, limit clamped to 1..=100
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page:  page.unwrap_or(1).max(1),
            limit: limit
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self { Self::new(None, None) }
}

/// Query parameters for list endpoints without extra filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// Page number (1-based, default: 1)
    pub page:  Option<u64>,
    /// Items per page (default: 10, max: 100)
    pub limit: Option<u64>,
}

impl PageQuery {
    pub fn page_request(&self) -> PageRequest { PageRequest::new(self.page, self.limit) }
}

/// Compact user representation embedded in tasks, comments and CC members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id:    i32,
    pub name:  String,
    pub email: String,
}

impl From<entity::users::Model> for UserSummary {
    fn from(user: entity::users::Model) -> Self {
        Self {
            id:    user.id,
            name:  user.name,
            email: user.email,
        }
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`)
/// in partial updates. Use together with `#[serde(default)]`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
