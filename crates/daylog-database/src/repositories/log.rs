//! Daily log repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use daylog_core::error::{AppError, ErrorKind};
use daylog_core::result::AppResult;
use daylog_core::types::{LogId, UserId};
use daylog_entity::log::{CreateLog, Log, LogFilter, UpdateLog};

use crate::store::LogStore;

/// PostgreSQL-backed log store.
#[derive(Debug, Clone)]
pub struct LogRepository {
    pool: PgPool,
}

impl LogRepository {
    /// Create a new log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogStore for LogRepository {
    async fn create(&self, data: &CreateLog) -> AppResult<Log> {
        sqlx::query_as::<_, Log>(
            "INSERT INTO logs (id, user_id, text, date) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(LogId::new())
        .bind(data.user_id)
        .bind(&data.text)
        .bind(data.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("logs_user_id_foreign") =>
            {
                AppError::conflict(format!("Owner {} does not exist", data.user_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create log", e),
        })
    }

    async fn find(&self, id: LogId, include_deleted: bool) -> AppResult<Option<Log>> {
        let sql = if include_deleted {
            "SELECT * FROM logs WHERE id = $1"
        } else {
            "SELECT * FROM logs WHERE id = $1 AND deleted_at IS NULL"
        };

        sqlx::query_as::<_, Log>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find log", e))
    }

    async fn update(&self, id: LogId, changes: &UpdateLog) -> AppResult<Log> {
        sqlx::query_as::<_, Log>(
            "UPDATE logs SET text = COALESCE($2, text), \
                             date = COALESCE($3, date), \
                             updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&changes.text)
        .bind(changes.date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update log", e))?
        .ok_or_else(|| AppError::not_found(format!("Log {id} not found")))
    }

    async fn soft_delete(&self, id: LogId) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE logs SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete log", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Log {id} not found")));
        }
        Ok(())
    }

    async fn restore(&self, id: LogId) -> AppResult<Log> {
        sqlx::query_as::<_, Log>(
            "UPDATE logs SET deleted_at = NULL, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to restore log", e))?
        .ok_or_else(|| AppError::not_found(format!("Log {id} not found")))
    }

    async fn list_for_owner(&self, owner: UserId, filter: &LogFilter) -> AppResult<Vec<Log>> {
        let mut sql = String::from("SELECT * FROM logs WHERE user_id = $1");
        if !filter.include_deleted {
            sql.push_str(" AND deleted_at IS NULL");
        }
        if filter.on_date.is_some() {
            sql.push_str(" AND date = $2");
        }
        sql.push_str(" ORDER BY date DESC, created_at DESC");

        let mut query = sqlx::query_as::<_, Log>(&sql).bind(owner);
        if let Some(date) = filter.on_date {
            query = query.bind(date);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list logs", e))
    }
}
