//! # Rejection Handlers
//!
//! Converts Axum extractor rejections into [`AppError::BadRequest`] so malformed
//! bodies, query strings and path parameters share the standard error body.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};

use crate::AppError;

/// Turn serde's "missing field `x` at line 1 column 2" into "Missing required field: x".
fn friendly_json_message(raw: String) -> String {
    if let Some(start) = raw.find("missing field `") {
        let rest = &raw[start + "missing field `".len() ..];
        if let Some(end) = rest.find('`') {
            return format!("Missing required field: {}", &rest[.. end]);
        }
    }
    raw
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match rejection {
            JsonRejection::JsonDataError(err) => friendly_json_message(err.body_text()),
            JsonRejection::JsonSyntaxError(err) => format!("Malformed JSON body: {}", err.body_text()),
            JsonRejection::MissingJsonContentType(_) => "Expected request with `Content-Type: application/json`".to_string(),
            other => other.body_text(),
        };
        AppError::bad_request(message)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let message = friendly_json_message(
            "Failed to deserialize the JSON body into the target type: missing field `title` at line 1 column 2"
                .to_string(),
        );
        assert_eq!(message, "Missing required field: title");
    }

    #[test]
    fn test_other_messages_pass_through() {
        let message = friendly_json_message("invalid type: string \"x\", expected i32".to_string());
        assert_eq!(message, "invalid type: string \"x\", expected i32");
    }
}
