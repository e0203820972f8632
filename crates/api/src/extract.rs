//! Request extractors whose rejections use the JSON error envelope.
//!
//! Axum's stock `Json` / `Query` reject with plain-text bodies and, for
//! well-formed JSON of the wrong shape, with 422. These wrappers route every
//! rejection through [`AppError::BadRequest`] instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body extractor.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
