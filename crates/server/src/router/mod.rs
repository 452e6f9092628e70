//! # API Router Configuration
//!
//! Configures API routes for the task tracker.

use axum::{
    Router,
    middleware,
    routing::{get, post},
};
use error::AppError;
use tower_http::trace::TraceLayer;

use crate::{
    AppState,
    middleware::{cors_layer, make_request_span, request_id_middleware},
};

mod cc_members;
mod comments;
mod task_statuses;
mod tasks;
mod users;

/// Creates the API router with all resource routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/users", post(users::create).get(users::list))
        .route(
            "/api/users/{id}",
            get(users::get).put(users::update).delete(users::delete),
        )
        .route(
            "/api/tasks/status",
            post(task_statuses::create).get(task_statuses::list),
        )
        .route(
            "/api/tasks/status/{id}",
            get(task_statuses::get)
                .put(task_statuses::update)
                .delete(task_statuses::delete),
        )
        .route("/api/tasks", post(tasks::create).get(tasks::list))
        .route(
            "/api/tasks/{task_id}",
            get(tasks::get).put(tasks::update).delete(tasks::delete),
        )
        .route("/api/tasks/{task_id}/details", get(tasks::details))
        .route(
            "/api/tasks/{task_id}/cc",
            post(cc_members::add).get(cc_members::list),
        )
        .route("/api/tasks/{task_id}/cc/bulk", post(cc_members::add_bulk))
        .route(
            "/api/tasks/{task_id}/cc/{member_id}",
            axum::routing::delete(cc_members::remove),
        )
        .route(
            "/api/tasks/{task_id}/comments",
            post(comments::create).get(comments::list),
        )
        .route(
            "/api/tasks/{task_id}/comments/{comment_id}",
            get(comments::get)
                .put(comments::update)
                .delete(comments::delete),
        )
        .with_state(state)
}

/// Creates the health check router
pub fn create_health_router() -> Router { Router::new().route("/health", get(|| async { "OK" })) }

/// Creates the main application router
///
/// Health check and API routes, wrapped in request id, tracing and CORS layers.
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .merge(create_health_router())
        .merge(create_router(state))
        .fallback(|| async { AppError::not_found("Route not found") })
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer())
}
