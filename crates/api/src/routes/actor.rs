use axum::routing::get;
use axum::Router;

use crate::handlers::{actor, method_not_allowed};
use crate::state::AppState;

/// Actor routes.
///
/// ```text
/// GET    /actors          list with linked movies
/// POST   /actors          create
/// PUT    /actors          update (id in body)
/// DELETE /actors?id=      delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/actors",
        get(actor::list)
            .post(actor::create)
            .put(actor::update)
            .delete(actor::delete)
            .fallback(method_not_allowed),
    )
}
