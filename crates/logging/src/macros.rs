//! # Logging Macros
//!
//! Convenience macros for structured logging with consistent field names.

/// Log a completed API request with method, path, status, duration and request id.
///
/// # Example
///
/// ```rust
/// use logging::{log_api_request, RequestId};
///
/// let request_id = RequestId::new();
/// log_api_request!(request_id, "GET", "/api/tasks", 200, 12);
/// ```
#[macro_export]
macro_rules! log_api_request {
    ($request_id:expr, $method:expr, $path:expr, $status:expr, $duration_ms:expr) => {
        $crate::info!(
            target: "api",
            request_id = %$request_id,
            method = %$method,
            path = %$path,
            status = %$status,
            duration_ms = %$duration_ms,
            "API request"
        )
    };
}
