//! Daily log use cases.

pub mod service;

pub use service::{ListLogs, LogService};
