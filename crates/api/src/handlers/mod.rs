pub mod actor;
pub mod auth;
pub mod health;
pub mod movie;

use axum::http::{Method, Uri};
use filmotheka_core::error::CoreError;

use crate::error::AppError;

/// Fallback for a known path hit with a method it does not serve.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::Core(CoreError::MethodNotAllowed(format!(
        "Method {method} not allowed"
    )))
}

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
