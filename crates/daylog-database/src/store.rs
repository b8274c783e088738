//! Storage traits implemented by every record store backend.

use std::fmt;

use async_trait::async_trait;

use daylog_core::result::AppResult;
use daylog_core::types::{LogId, UserId};
use daylog_entity::audit::{AuditEntry, CreateAuditEntry};
use daylog_entity::log::{CreateLog, Log, LogFilter, UpdateLog};
use daylog_entity::user::{NewUser, User};

/// Persistence for users and their audit trail.
///
/// User writes and the audit entries describing them are committed
/// together: either both are stored or neither is.
#[async_trait]
pub trait UserStore: Send + Sync + fmt::Debug {
    /// Insert a user together with its registration audit entries.
    async fn create_user(&self, user: &NewUser, audits: Vec<CreateAuditEntry>) -> AppResult<User>;

    /// Find a user by primary key.
    async fn find_user(&self, id: UserId) -> AppResult<Option<User>>;

    /// Persist the user's name and password hash together with the audit
    /// entries for whatever changed.
    ///
    /// Fails with `NotFound` if the user does not exist.
    async fn update_user(&self, user: &User, audits: Vec<CreateAuditEntry>) -> AppResult<User>;

    /// All audit entries for a user, oldest first.
    async fn audits_for(&self, user_id: UserId) -> AppResult<Vec<AuditEntry>>;
}

/// Persistence for daily logs.
#[async_trait]
pub trait LogStore: Send + Sync + fmt::Debug {
    /// Insert a log. Fails with `Conflict` if the owner does not exist.
    async fn create(&self, data: &CreateLog) -> AppResult<Log>;

    /// Find a log by primary key.
    async fn find(&self, id: LogId, include_deleted: bool) -> AppResult<Option<Log>>;

    /// Apply a partial update to a live log.
    ///
    /// Fails with `NotFound` if the log is missing or soft-deleted.
    async fn update(&self, id: LogId, changes: &UpdateLog) -> AppResult<Log>;

    /// Set the deletion marker. Fails with `NotFound` if the log is
    /// missing or already deleted.
    async fn soft_delete(&self, id: LogId) -> AppResult<()>;

    /// Clear the deletion marker. Fails with `NotFound` if the log is missing.
    async fn restore(&self, id: LogId) -> AppResult<Log>;

    /// An owner's logs, newest date first.
    async fn list_for_owner(&self, owner: UserId, filter: &LogFilter) -> AppResult<Vec<Log>>;
}
