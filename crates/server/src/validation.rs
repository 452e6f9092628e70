//! # Field Validation
//!
//! Validators referenced from the `#[validate(custom(...))]` attributes on the
//! request DTOs. Each validator reports at most one error for its field, so
//! the aggregated message lists exactly one violation per field.

use std::{borrow::Cow, sync::LazyLock};

use error::{AppError, Result};
use regex::Regex;
use validator::{Validate, ValidationError};

/// `local@domain.tld` with no whitespace and a single `@`
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"));

pub const NAME_MAX_LENGTH: usize = 255;
pub const EMAIL_MAX_LENGTH: usize = 255;
pub const TITLE_MAX_LENGTH: usize = 255;
pub const STATUS_NAME_MAX_LENGTH: usize = 50;
pub const STATUS_TYPE_MAX_LENGTH: usize = 20;
pub const COMMENT_MAX_LENGTH: usize = 500;

const PASSWORD_RULE: &str = "Password must be at least 8 characters long and contain at least one uppercase letter, \
                             one lowercase letter, and one number";

/// Request payloads that validate into a single [`AppError::Validation`].
pub trait ValidateRequest: Validate {
    /// Order in which field violations are reported
    const FIELD_ORDER: &'static [&'static str];

    /// Run every field validator and aggregate the failures.
    fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|errors| AppError::from_validation_errors(&errors, Self::FIELD_ORDER))
    }
}

fn violation(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

/// Required text with an upper bound on its character count
fn required_text(value: &str, label: &str, max: usize) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(violation(
            "required",
            format!("{label} is required and cannot be empty"),
        ));
    }
    if value.chars().count() > max {
        return Err(violation(
            "length",
            format!("{label} cannot exceed {max} characters"),
        ));
    }
    Ok(())
}

pub fn validate_name(value: &str) -> std::result::Result<(), ValidationError> {
    required_text(value, "Name", NAME_MAX_LENGTH)
}

/// Presence, then format, then length
pub fn validate_email(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(violation(
            "required",
            "Email is required and cannot be empty".to_string(),
        ));
    }
    if !EMAIL_REGEX.is_match(value.trim()) {
        return Err(violation("email", "Invalid email format".to_string()));
    }
    required_text(value, "Email", EMAIL_MAX_LENGTH)
}

pub fn validate_password(value: &str) -> std::result::Result<(), ValidationError> {
    auth::validate_password_strength(value).map_err(|_| violation("password", PASSWORD_RULE.to_string()))
}

pub fn validate_title(value: &str) -> std::result::Result<(), ValidationError> {
    required_text(value, "Title", TITLE_MAX_LENGTH)
}

pub fn validate_status_name(value: &str) -> std::result::Result<(), ValidationError> {
    required_text(value, "Status name", STATUS_NAME_MAX_LENGTH)
}

pub fn validate_status_type(value: &str) -> std::result::Result<(), ValidationError> {
    required_text(value, "Type", STATUS_TYPE_MAX_LENGTH)
}

pub fn validate_comment_text(value: &str) -> std::result::Result<(), ValidationError> {
    required_text(value, "Comment text", COMMENT_MAX_LENGTH)
}

/// Normalized form of an email address: trimmed and lower-cased
pub fn normalize_email(email: &str) -> String { email.trim().to_lowercase() }
