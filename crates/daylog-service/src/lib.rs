//! # daylog-service
//!
//! Business logic for Daylog. Each service orchestrates the record store,
//! validation, guards, and policies to implement one family of use cases.
//!
//! Services follow constructor injection: every dependency is provided
//! at construction time via `Arc` references.

pub mod audit;
pub mod context;
pub mod events;
pub mod log;
pub mod user;
pub mod validation;

pub use audit::Auditor;
pub use context::RequestContext;
pub use events::{EventListener, EventNotifier, LogCreated, TracingListener};
pub use log::{ListLogs, LogService};
pub use user::{RegisterUser, UpdateUser, UserService};
pub use validation::{LogSubmission, LogValidator, ValidLog};
