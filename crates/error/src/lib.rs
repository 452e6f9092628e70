//! # Taskflow Error Infrastructure
//!
//! Error types and API response shapes for the task tracker.
//!
//! Every service returns [`Result`]. Business-rule violations map to `400`,
//! unresolved ids to `404` and store or runtime failures to `500`.

pub mod middleware;
pub mod rejection;
pub mod response;
pub mod traits;

pub use middleware::INTERNAL_ERROR_MESSAGE;
pub use response::{ErrorBody, MessageResponse, Paginated, PaginationMeta};
pub use traits::ResultExt;

/// Convenience type alias for Result with AppError.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Main application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("NotFound: {message}")]
    NotFound {
        message: String,
    },

    #[error("BadRequest: {message}")]
    BadRequest {
        message: String,
    },

    #[error("Validation: {message}")]
    Validation {
        message: String,
    },

    #[error("DuplicateEmail: {message}")]
    DuplicateEmail {
        message: String,
    },

    #[error("DuplicateStatusName: {message}")]
    DuplicateStatusName {
        message: String,
    },

    #[error("AlreadyMember: {message}")]
    AlreadyMember {
        message: String,
    },

    #[error("Mismatch: {message}")]
    Mismatch {
        message: String,
    },

    #[error("HasDependents: {message}")]
    HasDependents {
        message: String,
    },

    #[error("Internal: {message}")]
    Internal {
        message: String,
    },

    #[error("Database: {message}")]
    Database {
        message: String,
    },

    #[error("IO: {message}")]
    Io {
        message: String,
    },

    #[error("Config: {message}")]
    Config {
        message: String,
    },

    #[error("Migration: {message}")]
    Migration {
        message: String,
    },
}

/// Seed operation result
#[derive(Debug, Clone)]
pub struct SeedResult {
    /// Number of records inserted
    pub inserted_count: usize,
    /// Seed name for logging
    pub seed_name:      String,
    /// Duration of the seed operation in milliseconds
    pub duration_ms:    u64,
    /// Any errors that occurred
    pub errors:         Vec<String>,
}

impl SeedResult {
    /// Creates a new successful seed result
    #[must_use]
    pub fn success(seed_name: &str, inserted: usize, duration_ms: u64) -> Self {
        Self {
            inserted_count: inserted,
            seed_name: seed_name.to_string(),
            duration_ms,
            errors: Vec::new(),
        }
    }

    /// Creates a new failed seed result
    #[must_use]
    pub fn with_error(seed_name: &str, error: &str) -> Self {
        Self {
            inserted_count: 0,
            seed_name:      seed_name.to_string(),
            duration_ms:    0,
            errors:         vec![error.to_string()],
        }
    }

    /// Returns true if the seed operation was successful
    #[must_use]
    pub fn is_success(&self) -> bool { self.errors.is_empty() }
}

impl AppError {
    /// Create a not found error.
    #[inline]
    pub fn not_found(message: impl ToString) -> Self {
        Self::NotFound {
            message: message.to_string(),
        }
    }

    /// Create a bad request error.
    #[inline]
    pub fn bad_request(message: impl ToString) -> Self {
        Self::BadRequest {
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    #[inline]
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create a duplicate email error.
    #[inline]
    pub fn duplicate_email(message: impl ToString) -> Self {
        Self::DuplicateEmail {
            message: message.to_string(),
        }
    }

    /// Create a duplicate status name error.
    #[inline]
    pub fn duplicate_status_name(message: impl ToString) -> Self {
        Self::DuplicateStatusName {
            message: message.to_string(),
        }
    }

    /// Create an already-member error.
    #[inline]
    pub fn already_member(message: impl ToString) -> Self {
        Self::AlreadyMember {
            message: message.to_string(),
        }
    }

    /// Create a parent/child mismatch error.
    #[inline]
    pub fn mismatch(message: impl ToString) -> Self {
        Self::Mismatch {
            message: message.to_string(),
        }
    }

    /// Create a has-dependents error.
    #[inline]
    pub fn has_dependents(message: impl ToString) -> Self {
        Self::HasDependents {
            message: message.to_string(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl ToString) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Create a database error.
    #[inline]
    pub fn database(message: impl ToString) -> Self {
        Self::Database {
            message: message.to_string(),
        }
    }

    /// Create a config error.
    #[inline]
    pub fn config(message: impl ToString) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Create a migration error.
    #[inline]
    pub fn migration(message: impl ToString) -> Self {
        Self::Migration {
            message: message.to_string(),
        }
    }

    /// Build a validation error from collected field violations.
    ///
    /// Fields listed in `field_order` are reported first and in that order,
    /// any remaining fields follow alphabetically. Only the first violation of
    /// each field is reported.
    pub fn from_validation_errors(errors: &validator::ValidationErrors, field_order: &[&str]) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_by_key(|field| {
            (
                field_order
                    .iter()
                    .position(|f| f == field)
                    .unwrap_or(usize::MAX),
                *field,
            )
        });

        let messages: Vec<String> = fields
            .iter()
            .filter_map(|field| {
                field_errors.get(*field).and_then(|errs| errs.first()).map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();

        let message = if messages.is_empty() {
            "Validation failed".to_string()
        }
        else {
            format!("Validation failed: {}", messages.join(", "))
        };

        Self::Validation {
            message,
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> http::StatusCode {
        match self {
            AppError::NotFound {
                ..
            } => http::StatusCode::NOT_FOUND,
            AppError::BadRequest {
                ..
            } |
            AppError::Validation {
                ..
            } |
            AppError::DuplicateEmail {
                ..
            } |
            AppError::DuplicateStatusName {
                ..
            } |
            AppError::AlreadyMember {
                ..
            } |
            AppError::Mismatch {
                ..
            } |
            AppError::HasDependents {
                ..
            } => http::StatusCode::BAD_REQUEST,
            AppError::Internal {
                ..
            } |
            AppError::Database {
                ..
            } |
            AppError::Io {
                ..
            } |
            AppError::Config {
                ..
            } |
            AppError::Migration {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound {
                ..
            } => "NOT_FOUND",
            AppError::BadRequest {
                ..
            } => "BAD_REQUEST",
            AppError::Validation {
                ..
            } => "VALIDATION_ERROR",
            AppError::DuplicateEmail {
                ..
            } => "DUPLICATE_EMAIL",
            AppError::DuplicateStatusName {
                ..
            } => "DUPLICATE_STATUS_NAME",
            AppError::AlreadyMember {
                ..
            } => "ALREADY_MEMBER",
            AppError::Mismatch {
                ..
            } => "MISMATCH",
            AppError::HasDependents {
                ..
            } => "HAS_DEPENDENTS",
            AppError::Internal {
                ..
            } => "INTERNAL_ERROR",
            AppError::Database {
                ..
            } => "DATABASE_ERROR",
            AppError::Io {
                ..
            } => "IO_ERROR",
            AppError::Config {
                ..
            } => "CONFIG_ERROR",
            AppError::Migration {
                ..
            } => "MIGRATION_ERROR",
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound {
                message,
            } |
            AppError::BadRequest {
                message,
            } |
            AppError::Validation {
                message,
            } |
            AppError::DuplicateEmail {
                message,
            } |
            AppError::DuplicateStatusName {
                message,
            } |
            AppError::AlreadyMember {
                message,
            } |
            AppError::Mismatch {
                message,
            } |
            AppError::HasDependents {
                message,
            } |
            AppError::Internal {
                message,
            } |
            AppError::Database {
                message,
            } |
            AppError::Io {
                message,
            } |
            AppError::Config {
                message,
            } |
            AppError::Migration {
                message,
            } => message,
        }
    }

    /// Returns true for failures the caller cannot fix (HTTP 5xx).
    pub fn is_server_error(&self) -> bool { self.status().is_server_error() }

    /// Add context to the error.
    #[inline]
    pub fn context(self, context: impl ToString) -> Self {
        let context_msg = context.to_string();
        let prefixed = |message: String| format!("{}: {}", context_msg, message);
        match self {
            AppError::NotFound {
                message,
            } => {
                Self::NotFound {
                    message: prefixed(message),
                }
            },
            AppError::BadRequest {
                message,
            } => {
                Self::BadRequest {
                    message: prefixed(message),
                }
            },
            AppError::Validation {
                message,
            } => {
                Self::Validation {
                    message: prefixed(message),
                }
            },
            AppError::DuplicateEmail {
                message,
            } => {
                Self::DuplicateEmail {
                    message: prefixed(message),
                }
            },
            AppError::DuplicateStatusName {
                message,
            } => {
                Self::DuplicateStatusName {
                    message: prefixed(message),
                }
            },
            AppError::AlreadyMember {
                message,
            } => {
                Self::AlreadyMember {
                    message: prefixed(message),
                }
            },
            AppError::Mismatch {
                message,
            } => {
                Self::Mismatch {
                    message: prefixed(message),
                }
            },
            AppError::HasDependents {
                message,
            } => {
                Self::HasDependents {
                    message: prefixed(message),
                }
            },
            AppError::Internal {
                message,
            } => {
                Self::Internal {
                    message: prefixed(message),
                }
            },
            AppError::Database {
                message,
            } => {
                Self::Database {
                    message: prefixed(message),
                }
            },
            AppError::Io {
                message,
            } => {
                Self::Io {
                    message: prefixed(message),
                }
            },
            AppError::Config {
                message,
            } => {
                Self::Config {
                    message: prefixed(message),
                }
            },
            AppError::Migration {
                message,
            } => {
                Self::Migration {
                    message: prefixed(message),
                }
            },
        }
    }
}

/// Convert anyhow errors to AppError.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Convert std::io errors to AppError.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Convert String to AppError.
impl From<String> for AppError {
    fn from(s: String) -> Self {
        Self::BadRequest {
            message: s,
        }
    }
}

/// Convert &str to AppError.
impl From<&str> for AppError {
    fn from(s: &str) -> Self { Self::from(s.to_string()) }
}

/// Convert Sea-ORM database errors to AppError.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database {
            message: err.to_string(),
        }
    }
}

/// Convert Sea-ORM transaction errors to AppError.
impl From<sea_orm::TransactionError<AppError>> for AppError {
    fn from(err: sea_orm::TransactionError<AppError>) -> Self {
        match err {
            sea_orm::TransactionError::Connection(e) => e.into(),
            sea_orm::TransactionError::Transaction(e) => e,
        }
    }
}

/// Convert validator validation errors to AppError.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self { Self::from_validation_errors(&err, &[]) }
}
