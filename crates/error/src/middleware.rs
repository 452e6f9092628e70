//! # Error Responses
//!
//! Converts [`AppError`] values into JSON HTTP responses.
//!
//! ## Usage
//!
//! ```rust
//! use axum::response::IntoResponse;
//! use error::AppError;
//!
//! let response = AppError::not_found("Task not found").into_response();
//! assert_eq!(response.status(), 404);
//! ```

use axum::{
    Json,
    response::{IntoResponse, Response},
};

use crate::{AppError, response::ErrorBody};

/// Message sent in place of the detail of any server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Client errors carry their message. Server errors are logged with their
/// detail and answered with [`INTERNAL_ERROR_MESSAGE`].
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if self.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "Request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        }
        else {
            tracing::debug!(code = self.code(), error = %self, "Request rejected");
            self.message().to_string()
        };

        (status, Json(ErrorBody::new(self.code(), message))).into_response()
    }
}
