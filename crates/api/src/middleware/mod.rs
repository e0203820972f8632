//! Authorization middleware and extractors.
//!
//! - [`rbac::require_role`] -- the Authorization Gate applied to every
//!   protected route.
//! - [`auth::AuthUser`] -- extracts the caller the gate admitted.

pub mod auth;
pub mod rbac;
