//! Route handlers organized by domain.

pub mod health;
pub mod log;
pub mod user;
