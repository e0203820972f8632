//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- signed access-token issuance and verification with key rotation.
//! - [`authenticator`] -- credential check against the user store.

pub mod authenticator;
pub mod jwt;
pub mod password;
