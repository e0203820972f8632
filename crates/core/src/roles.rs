//! User roles and their capabilities.
//!
//! Roles are persisted as small integers (`users.role`) and embedded in
//! access tokens under the same encoding. The numeric values must match the
//! CHECK constraint in `20240101000001_create_users.sql`.

use serde::{Deserialize, Serialize};

/// Numeric encoding of [`Role::Admin`].
pub const ROLE_ADMIN: i16 = 1;
/// Numeric encoding of [`Role::ReadOnly`].
pub const ROLE_READ_ONLY: i16 = 2;

/// Coarse permission level attached to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Role {
    /// Full read/write access to every resource.
    Admin,
    /// May only read.
    ReadOnly,
}

/// Whether a request only observes state or may change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl Access {
    /// Classify an HTTP method name. `GET` and `HEAD` are reads; every other
    /// method (including unknown ones) is treated as a write.
    pub fn from_method(method: &str) -> Self {
        match method {
            "GET" | "HEAD" => Access::Read,
            _ => Access::Write,
        }
    }
}

impl Role {
    /// Decode the persisted / token representation of a role.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            c if c == i64::from(ROLE_ADMIN) => Some(Role::Admin),
            c if c == i64::from(ROLE_READ_ONLY) => Some(Role::ReadOnly),
            _ => None,
        }
    }

    /// The persisted / token representation of this role.
    pub fn code(self) -> i16 {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::ReadOnly => ROLE_READ_ONLY,
        }
    }

    /// Capability table: admins may do anything, read-only users may only read.
    pub fn permits(self, access: Access) -> bool {
        matches!(
            (self, access),
            (Role::Admin, _) | (Role::ReadOnly, Access::Read)
        )
    }
}

impl TryFrom<i64> for Role {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Role::from_code(code).ok_or_else(|| format!("Unknown role code {code}"))
    }
}

impl From<Role> for i64 {
    fn from(role: Role) -> Self {
        i64::from(role.code())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::ReadOnly => f.write_str("read_only"),
        }
    }
}
