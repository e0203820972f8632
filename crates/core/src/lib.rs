//! Domain logic for the filmotheka catalog.
//!
//! Everything in this crate is free of I/O: error types, role capabilities,
//! field validation, and the actor/movie link reconciliation planner.

pub mod actor;
pub mod error;
pub mod links;
pub mod movie;
pub mod roles;
pub mod types;
