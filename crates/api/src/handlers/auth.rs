//! Handler for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::authenticator::authenticate;
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for `POST /auth`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /auth
///
/// Exchange a username and password for a signed access token.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let issued = authenticate(
        &state.pool,
        &state.config.jwt,
        &input.username,
        &input.password,
    )
    .await?;

    Ok(Json(TokenResponse {
        token: issued.token,
    }))
}
