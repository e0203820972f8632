//! User entity model and DTOs.

use filmotheka_core::roles::Role;
use filmotheka_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- never serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    /// Numeric role code, see [`filmotheka_core::roles`].
    pub role: i16,
    pub created_at: Timestamp,
}

impl User {
    /// Decoded role. `None` only if the row predates the role CHECK constraint.
    pub fn role(&self) -> Option<Role> {
        Role::from_code(i64::from(self.role))
    }
}

/// DTO for creating a new user. Users are provisioned out of band.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}
