pub mod actor;
pub mod auth;
pub mod health;
pub mod movie;

use axum::middleware::from_fn_with_state;
use axum::Router;

use crate::middleware::rbac::require_role;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth        POST                      login (public)
/// /actors      GET, POST, PUT, DELETE    gated by role
/// /movies      GET, POST, PUT, DELETE    gated by role
/// ```
///
/// The gate is attached with `route_layer`, so requests for unknown paths
/// fall through to the router's 404 rather than being rejected as 401.
pub fn api_routes(state: AppState) -> Router<AppState> {
    let gated = Router::new()
        .merge(actor::router())
        .merge(movie::router())
        .route_layer(from_fn_with_state(state, require_role));

    Router::new().merge(auth::router()).merge(gated)
}
