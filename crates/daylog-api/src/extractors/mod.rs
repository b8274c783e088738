//! Custom Axum extractors.

pub mod auth;
pub mod body;
pub mod path;

pub use auth::AuthUser;
pub use body::LogForm;
pub use path::parse_log_id;
