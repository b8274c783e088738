//! Ownership policy for logs.

use tracing::warn;

use daylog_core::error::AppError;
use daylog_entity::log::Log;

use crate::principal::Principal;

/// Only a log's owner may view or mutate it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPolicy;

impl LogPolicy {
    /// Create the policy.
    pub fn new() -> Self {
        Self
    }

    fn require_owner(&self, principal: &Principal, log: &Log, action: &str) -> Result<(), AppError> {
        if log.is_owned_by(principal.user_id) {
            return Ok(());
        }
        warn!(
            user_id = %principal.user_id,
            log_id = %log.id,
            action,
            "Ownership check failed"
        );
        Err(AppError::forbidden(format!(
            "You may not {action} a log you do not own"
        )))
    }

    /// Whether the principal may read the log.
    pub fn authorize_view(&self, principal: &Principal, log: &Log) -> Result<(), AppError> {
        self.require_owner(principal, log, "view")
    }

    /// Whether the principal may change the log.
    pub fn authorize_update(&self, principal: &Principal, log: &Log) -> Result<(), AppError> {
        self.require_owner(principal, log, "update")
    }

    /// Whether the principal may soft-delete the log.
    pub fn authorize_delete(&self, principal: &Principal, log: &Log) -> Result<(), AppError> {
        self.require_owner(principal, log, "delete")
    }

    /// Whether the principal may restore the log.
    pub fn authorize_restore(&self, principal: &Principal, log: &Log) -> Result<(), AppError> {
        self.require_owner(principal, log, "restore")
    }
}
