//! The Authorization Gate.
//!
//! [`authorize`] is a pure decision over the `Authorization` header and the
//! request method:
//!
//! ```text
//! allow = valid(token) && role.permits(access(method))
//! ```
//!
//! [`require_role`] wraps it as Axum middleware. Every denial is a 401 with a
//! reason-specific message.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderValue, Method};
use axum::middleware::Next;
use axum::response::Response;
use filmotheka_core::error::CoreError;
use filmotheka_core::roles::Access;

use super::auth::AuthUser;
use crate::auth::jwt::{validate_token, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Why the gate refused a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No `Authorization` header, or an empty one.
    NoToken,
    /// The token failed signature or expiry verification.
    InvalidToken,
    /// The token verified but lacks a usable `userID` or `role` claim.
    InvalidClaims,
    /// The role may not perform this method.
    InsufficientRole,
}

impl DenyReason {
    pub fn message(self) -> &'static str {
        match self {
            DenyReason::NoToken => "No token provided",
            DenyReason::InvalidToken => "Invalid token",
            DenyReason::InvalidClaims => "Invalid token claims",
            DenyReason::InsufficientRole => "Not authorized for this action",
        }
    }
}

/// Outcome of [`authorize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow(AuthUser),
    Deny(DenyReason),
}

/// Decide whether a request may proceed.
///
/// The `Bearer ` prefix is stripped when present; a bare token is accepted too.
pub fn authorize(header: Option<&HeaderValue>, method: &Method, jwt: &JwtConfig) -> GateDecision {
    let Some(header) = header else {
        return GateDecision::Deny(DenyReason::NoToken);
    };
    let Ok(raw) = header.to_str() else {
        return GateDecision::Deny(DenyReason::InvalidToken);
    };
    let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim();
    if token.is_empty() {
        return GateDecision::Deny(DenyReason::NoToken);
    }

    let Ok(claims) = validate_token(token, jwt) else {
        return GateDecision::Deny(DenyReason::InvalidToken);
    };

    let (Some(user_id), Some(role)) = (claims.user_id(), claims.role()) else {
        return GateDecision::Deny(DenyReason::InvalidClaims);
    };

    if role.permits(Access::from_method(method.as_str())) {
        GateDecision::Allow(AuthUser { user_id, role })
    } else {
        GateDecision::Deny(DenyReason::InsufficientRole)
    }
}

/// Axum middleware enforcing [`authorize`] and exposing the admitted
/// [`AuthUser`] to downstream handlers.
pub async fn require_role(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let decision = authorize(
        request.headers().get(AUTHORIZATION),
        request.method(),
        &state.config.jwt,
    );

    match decision {
        GateDecision::Allow(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        GateDecision::Deny(reason) => {
            tracing::debug!(
                method = %request.method(),
                uri = %request.uri(),
                ?reason,
                "Request denied by authorization gate"
            );
            Err(AppError::Core(CoreError::Unauthorized(
                reason.message().to_string(),
            )))
        }
    }
}
