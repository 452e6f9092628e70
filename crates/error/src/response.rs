//! # API Response Types
//!
//! JSON shapes shared by every endpoint: the error body, the paginated list
//! envelope and the plain message returned by deletes.

use serde::{Deserialize, Serialize};

/// Body rendered for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human readable message
    pub error: String,
    /// Stable machine readable code
    pub code:  String,
}

impl ErrorBody {
    /// Create a new error body.
    pub fn new(code: impl ToString, message: impl ToString) -> Self {
        Self {
            error: message.to_string(),
            code:  code.to_string(),
        }
    }
}

/// Confirmation message returned by delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response.
    pub fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (1-indexed).
    pub current_page:   u64,
    /// Total number of pages.
    pub total_pages:    u64,
    /// Total number of items.
    pub total_items:    u64,
    /// Number of items per page.
    pub items_per_page: u64,
}

impl PaginationMeta {
    /// Create pagination metadata.
    ///
    /// `page` is raised to 1 and `per_page` to 1 so the page count is always defined.
    pub fn new(page: u64, per_page: u64, total_items: u64) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        Self {
            current_page: page,
            total_pages: total_items.div_ceil(per_page),
            total_items,
            items_per_page: per_page,
        }
    }

    /// Number of rows to skip for the current page.
    pub fn offset(&self) -> u64 {
        self.current_page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
    }

    /// Returns true if the current page lies past the last page.
    pub fn is_past_end(&self) -> bool { self.current_page > self.total_pages }
}

/// Paginated list envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items:      Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> Paginated<T> {
    /// Create a new page of items.
    pub fn new(items: Vec<T>, pagination: PaginationMeta) -> Self {
        Self {
            items,
            pagination,
        }
    }

    /// Convert every item while keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items:      self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
