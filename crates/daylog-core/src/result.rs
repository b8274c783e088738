//! Convenience result type alias for Daylog.

use crate::error::AppError;

/// A specialized `Result` type for Daylog operations.
pub type AppResult<T> = Result<T, AppError>;
