//! Audit trail repository implementation.

use sqlx::{PgExecutor, PgPool};

use daylog_core::error::{AppError, ErrorKind};
use daylog_core::result::AppResult;
use daylog_core::types::{AuditEntryId, UserId};
use daylog_entity::audit::{AuditEntry, CreateAuditEntry};

/// Repository for audit trail entries.
///
/// Entries are only ever appended; writes take an executor so they can
/// join the transaction of the user write they describe.
#[derive(Debug, Clone)]
pub struct AuditRepository {
    pool: PgPool,
}

impl AuditRepository {
    /// Create a new audit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one entry using the given executor (pool or transaction).
    pub async fn append<'e, E>(executor: E, data: &CreateAuditEntry) -> AppResult<AuditEntry>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, AuditEntry>(
            "INSERT INTO audits (id, user_id, actor_id, event, attribute, old_value, new_value) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(AuditEntryId::new())
        .bind(data.user_id)
        .bind(data.actor_id)
        .bind(data.event)
        .bind(data.attribute)
        .bind(&data.old_value)
        .bind(&data.new_value)
        .fetch_one(executor)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append audit entry", e))
    }

    /// All entries for a user, oldest first.
    pub async fn find_for_user(&self, user_id: UserId) -> AppResult<Vec<AuditEntry>> {
        sqlx::query_as::<_, AuditEntry>(
            "SELECT * FROM audits WHERE user_id = $1 ORDER BY created_at ASC, event ASC, attribute ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list audit entries", e))
    }
}
