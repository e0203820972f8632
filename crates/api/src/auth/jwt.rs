//! Access-token issuance and verification.
//!
//! Tokens are HS256-signed JWTs. They are signed with the current secret and
//! verified against the current secret first, then against each retired
//! secret, so the key can be rotated without invalidating live sessions.

use filmotheka_core::roles::Role;
use filmotheka_core::types::{DbId, Timestamp};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims written into every issued token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The user's internal database id.
    #[serde(rename = "userID")]
    pub user_id: DbId,
    /// The user's role, encoded as its integer code.
    pub role: Role,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Claims as read back from a verified token.
///
/// Identity fields are kept untyped so a token that verifies but carries a
/// malformed role can be told apart from one that fails verification.
#[derive(Debug, Deserialize, Clone)]
pub struct VerifiedClaims {
    #[serde(rename = "userID", default)]
    pub user_id: Option<serde_json::Value>,
    #[serde(default)]
    pub role: Option<serde_json::Value>,
    pub exp: i64,
}

impl VerifiedClaims {
    /// The user id, if present and integral.
    pub fn user_id(&self) -> Option<DbId> {
        self.user_id.as_ref().and_then(serde_json::Value::as_i64)
    }

    /// The role, if present and one of the known codes.
    pub fn role(&self) -> Option<Role> {
        self.role
            .as_ref()
            .and_then(serde_json::Value::as_i64)
            .and_then(Role::from_code)
    }
}

/// Configuration for token signing and verification.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign new tokens.
    pub secret: String,
    /// Retired secrets still accepted when verifying.
    pub previous_secrets: Vec<String>,
    /// Token lifetime in hours (default: 72).
    pub token_ttl_hours: i64,
}

/// Default token lifetime in hours.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 72;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                | Required | Default |
    /// |------------------------|----------|---------|
    /// | `JWT_SECRET`           | **yes**  | --      |
    /// | `JWT_PREVIOUS_SECRETS` | no       | empty   |
    /// | `JWT_TTL_HOURS`        | no       | `72`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let previous_secrets: Vec<String> = std::env::var("JWT_PREVIOUS_SECRETS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let token_ttl_hours: i64 = std::env::var("JWT_TTL_HOURS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_HOURS.to_string())
            .parse()
            .expect("JWT_TTL_HOURS must be a valid i64");

        Self {
            secret,
            previous_secrets,
            token_ttl_hours,
        }
    }

    /// Secrets accepted for verification, current first.
    fn verification_secrets(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.secret.as_str()).chain(self.previous_secrets.iter().map(String::as_str))
    }
}

/// A freshly signed token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Sign a token for the given user, valid for `config.token_ttl_hours`.
pub fn generate_token(
    user_id: DbId,
    role: Role,
    config: &JwtConfig,
) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::hours(config.token_ttl_hours);

    let claims = Claims {
        user_id,
        role,
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    let token = encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(IssuedToken { token, expires_at })
}

/// Verify a token's signature and expiry and return its claims.
///
/// Each configured secret is tried in turn; only a signature mismatch moves on
/// to the next one. Any other failure (expired, malformed) is returned as is.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<VerifiedClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256, validates exp
    validation.leeway = 0;
    let mut last_err = None;

    for secret in config.verification_secrets() {
        match decode::<VerifiedClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        ) {
            Ok(data) => return Ok(data.claims),
            Err(e) if matches!(e.kind(), ErrorKind::InvalidSignature) => last_err = Some(e),
            Err(e) => return Err(e),
        }
    }

    Err(last_err.unwrap_or_else(|| ErrorKind::InvalidSignature.into()))
}
