use axum::routing::post;
use axum::Router;

use crate::handlers::{auth, method_not_allowed};
use crate::state::AppState;

/// Auth routes.
///
/// ```text
/// POST /auth      login
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/auth", post(auth::login).fallback(method_not_allowed))
}
