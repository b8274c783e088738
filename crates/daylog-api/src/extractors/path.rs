//! Typed path parameter helpers.

use daylog_core::error::AppError;
use daylog_core::types::LogId;

/// Parse a log id from a path segment. Malformed ids name no log.
pub fn parse_log_id(s: &str) -> Result<LogId, AppError> {
    s.parse()
        .map_err(|_| AppError::not_found(format!("Log {s} not found")))
}
