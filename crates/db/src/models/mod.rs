pub mod actor;
pub mod date;
pub mod movie;
pub mod user;
