//! Authenticated-caller extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use filmotheka_core::error::CoreError;
use filmotheka_core::roles::Role;
use filmotheka_core::types::DbId;

use crate::error::AppError;

/// The caller admitted by [`require_role`](super::rbac::require_role).
///
/// The gate inserts this into the request extensions; handlers behind the gate
/// take it as an extractor parameter:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    /// The user's internal database id (from the `userID` claim).
    pub user_id: DbId,
    pub role: Role,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().copied().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("No token provided".into()))
        })
    }
}
