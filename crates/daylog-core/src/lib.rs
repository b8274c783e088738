//! # daylog-core
//!
//! Core crate for Daylog. Contains configuration schemas, typed
//! identifiers, the clock abstraction used for "today" queries, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Daylog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind, FieldErrors};
pub use result::AppResult;
