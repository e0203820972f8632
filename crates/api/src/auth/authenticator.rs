//! Username/password authentication.
//!
//! [`authenticate`] looks a user up in a [`CredentialStore`], verifies the
//! submitted password against the stored Argon2id hash, and issues a signed
//! token carrying the user's id and role. Unknown usernames and wrong
//! passwords produce the same [`AuthError::InvalidCredentials`] so responses
//! do not reveal which usernames exist.

use async_trait::async_trait;
use filmotheka_core::error::CoreError;
use filmotheka_core::roles::Role;
use filmotheka_core::types::DbId;
use filmotheka_db::repositories::UserRepo;
use filmotheka_db::DbPool;

use crate::auth::jwt::{generate_token, IssuedToken, JwtConfig};
use crate::auth::password::verify_password;
use crate::error::AppError;

/// What the authenticator needs to know about a user.
#[derive(Debug, Clone)]
pub struct StoredCredential {
    pub user_id: DbId,
    pub password_hash: String,
    /// `None` if the stored role code is not a known [`Role`].
    pub role: Option<Role>,
}

/// Lookup of stored credentials by username.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_credential(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredential>, sqlx::Error>;
}

#[async_trait]
impl CredentialStore for DbPool {
    async fn find_credential(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredential>, sqlx::Error> {
        let user = UserRepo::find_by_username(self, username).await?;
        Ok(user.map(|u| StoredCredential {
            user_id: u.id,
            role: u.role(),
            password_hash: u.password_hash,
        }))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Stored password hash for user {user_id} is unreadable: {reason}")]
    CorruptHash { user_id: DbId, reason: String },

    #[error("User {0} has no recognized role")]
    UnknownRole(DbId),

    #[error("Error while signing the token: {0}")]
    TokenIssuance(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                AppError::Core(CoreError::Unauthorized(err.to_string()))
            }
            AuthError::Store(e) => AppError::Database(e),
            other => AppError::InternalError(other.to_string()),
        }
    }
}

/// Verify `username` / `password` and issue a token on success.
pub async fn authenticate<S>(
    store: &S,
    jwt: &JwtConfig,
    username: &str,
    password: &str,
) -> Result<IssuedToken, AuthError>
where
    S: CredentialStore + ?Sized,
{
    let credential = store
        .find_credential(username)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let password_valid = verify_password(password, &credential.password_hash).map_err(|e| {
        AuthError::CorruptHash {
            user_id: credential.user_id,
            reason: e.to_string(),
        }
    })?;

    if !password_valid {
        tracing::debug!(user_id = credential.user_id, "Password mismatch");
        return Err(AuthError::InvalidCredentials);
    }

    let role = credential
        .role
        .ok_or(AuthError::UnknownRole(credential.user_id))?;

    let issued = generate_token(credential.user_id, role, jwt)?;
    tracing::info!(
        user_id = credential.user_id,
        %role,
        expires_at = %issued.expires_at,
        "Issued access token"
    );
    Ok(issued)
}
