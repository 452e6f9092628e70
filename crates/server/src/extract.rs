//! # Request Extractors
//!
//! Thin wrappers over the Axum extractors whose rejections convert into
//! [`AppError`], so malformed input renders the same JSON error body as every
//! other failure.

use axum::extract::{FromRequest, FromRequestParts};
use error::AppError;

/// JSON body extractor
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path parameter extractor
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
