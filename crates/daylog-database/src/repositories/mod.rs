//! PostgreSQL repository implementations of the store traits.

pub mod audit;
pub mod log;
pub mod user;

pub use audit::AuditRepository;
pub use log::LogRepository;
pub use user::UserRepository;
