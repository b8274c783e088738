//! User registration, profile, and audit trail use cases.

pub mod service;

pub use service::{RegisterUser, UpdateUser, UserService};
