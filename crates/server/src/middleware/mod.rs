//! # HTTP Middleware
//!
//! Request ids, per-request tracing spans and CORS.

pub mod request_id;

use axum::{body::Body, http::Request};
use logging::RequestId;
use tower_http::cors::CorsLayer;
use tracing::Span;

pub use request_id::request_id_middleware;

/// Permissive CORS: any origin, method and header
pub fn cors_layer() -> CorsLayer { CorsLayer::permissive() }

/// Span for `tower_http::trace::TraceLayer` carrying method, path and request id
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(ToString::to_string)
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
