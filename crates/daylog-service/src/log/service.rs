//! Log CRUD: validation, create guards, ownership, and events.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use daylog_auth::{GuardChain, LogPolicy};
use daylog_core::error::AppError;
use daylog_core::result::AppResult;
use daylog_core::traits::Clock;
use daylog_core::types::LogId;
use daylog_database::LogStore;
use daylog_entity::log::{CreateLog, Log, LogFilter};

use crate::context::RequestContext;
use crate::events::{EventNotifier, LogCreated};
use crate::validation::{LogSubmission, LogValidator};

/// Listing options.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListLogs {
    /// Only logs dated today.
    #[serde(default)]
    pub today: bool,
    /// Include soft-deleted logs.
    #[serde(default)]
    pub with_trashed: bool,
}

/// Orchestrates every operation on daily logs.
#[derive(Debug, Clone)]
pub struct LogService {
    logs: Arc<dyn LogStore>,
    validator: LogValidator,
    guards: GuardChain,
    policy: LogPolicy,
    notifier: Arc<EventNotifier>,
    clock: Arc<dyn Clock>,
}

impl LogService {
    /// Creates a new log service.
    pub fn new(
        logs: Arc<dyn LogStore>,
        validator: LogValidator,
        guards: GuardChain,
        notifier: Arc<EventNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            logs,
            validator,
            guards,
            policy: LogPolicy::new(),
            notifier,
            clock,
        }
    }

    /// Validate, check create guards, store, then notify listeners.
    pub async fn create(&self, ctx: &RequestContext, submission: &LogSubmission) -> AppResult<Log> {
        let valid = self.validator.validate_create(submission)?;
        self.guards.authorize_create(&ctx.principal)?;

        let log = self
            .logs
            .create(&CreateLog {
                user_id: ctx.user_id(),
                text: valid.text,
                date: valid.date,
            })
            .await?;

        info!(log_id = %log.id, user_id = %log.user_id, date = %log.date, "Log created");

        self.notifier
            .emit(&LogCreated {
                log: log.clone(),
                owner: ctx.principal.clone(),
            })
            .await;

        Ok(log)
    }

    /// Read one of the principal's logs.
    pub async fn show(&self, ctx: &RequestContext, id: LogId, with_trashed: bool) -> AppResult<Log> {
        let log = self.load(id, with_trashed).await?;
        self.policy.authorize_view(&ctx.principal, &log)?;
        Ok(log)
    }

    /// Apply a partial update to one of the principal's live logs.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: LogId,
        submission: &LogSubmission,
    ) -> AppResult<Log> {
        let log = self.load(id, false).await?;
        self.policy.authorize_update(&ctx.principal, &log)?;

        let changes = self.validator.validate_update(submission)?;
        if changes.is_empty() {
            return Ok(log);
        }

        let log = self.logs.update(id, &changes).await?;
        info!(log_id = %id, user_id = %ctx.user_id(), "Log updated");
        Ok(log)
    }

    /// Soft-delete one of the principal's logs.
    pub async fn delete(&self, ctx: &RequestContext, id: LogId) -> AppResult<()> {
        let log = self.load(id, false).await?;
        self.policy.authorize_delete(&ctx.principal, &log)?;

        self.logs.soft_delete(id).await?;
        info!(log_id = %id, user_id = %ctx.user_id(), "Log deleted");
        Ok(())
    }

    /// Bring back one of the principal's soft-deleted logs.
    pub async fn restore(&self, ctx: &RequestContext, id: LogId) -> AppResult<Log> {
        let log = self.load(id, true).await?;
        self.policy.authorize_restore(&ctx.principal, &log)?;

        let log = self.logs.restore(id).await?;
        info!(log_id = %id, user_id = %ctx.user_id(), "Log restored");
        Ok(log)
    }

    /// The principal's logs, newest date first.
    pub async fn list(&self, ctx: &RequestContext, options: ListLogs) -> AppResult<Vec<Log>> {
        let filter = LogFilter {
            on_date: options.today.then(|| self.clock.today()),
            include_deleted: options.with_trashed,
        };
        self.logs.list_for_owner(ctx.user_id(), &filter).await
    }

    /// The principal's live logs dated today.
    pub async fn list_today(&self, ctx: &RequestContext) -> AppResult<Vec<Log>> {
        self.logs
            .list_for_owner(ctx.user_id(), &LogFilter::today(self.clock.as_ref()))
            .await
    }

    async fn load(&self, id: LogId, with_trashed: bool) -> AppResult<Log> {
        self.logs
            .find(id, with_trashed)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Log {id} not found")))
    }
}
