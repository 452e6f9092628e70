//! # CC Member Data Transfer Objects

use entity::task_cc_members;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::UserSummary;
use crate::validation::ValidateRequest;

/// Request to add one CC member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate)]
pub struct AddCcMemberRequest {
    #[validate(range(min = 1, message = "User ID must be a positive integer"))]
    pub user_id: i32,
}

impl ValidateRequest for AddCcMemberRequest {
    const FIELD_ORDER: &'static [&'static str] = &["user_id"];
}

/// Request to add several CC members at once.
///
/// Duplicates, non-positive ids, unknown users and existing members are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BulkAddCcMembersRequest {
    pub user_ids: Vec<i32>,
}

impl BulkAddCcMembersRequest {
    /// Positive ids in first-seen order without duplicates
    pub fn distinct_ids(&self) -> Vec<i32> {
        let mut seen = std::collections::HashSet::new();
        self.user_ids
            .iter()
            .copied()
            .filter(|id| *id > 0 && seen.insert(*id))
            .collect()
    }
}

/// CC member with the user it refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcMemberResponse {
    #[serde(flatten)]
    pub member: task_cc_members::Model,
    pub user:   Option<UserSummary>,
}
