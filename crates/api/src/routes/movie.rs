use axum::routing::get;
use axum::Router;

use crate::handlers::{method_not_allowed, movie};
use crate::state::AppState;

/// Movie routes.
///
/// ```text
/// GET    /movies?search=&sortBy=&sortOrder=   list
/// POST   /movies                              create
/// PUT    /movies                              update (id in body)
/// DELETE /movies?id=                          delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/movies",
        get(movie::list)
            .post(movie::create)
            .put(movie::update)
            .delete(movie::delete)
            .fallback(method_not_allowed),
    )
}
