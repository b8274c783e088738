//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use daylog_core::error::{AppError, ErrorKind};
use daylog_core::result::AppResult;
use daylog_core::types::UserId;
use daylog_entity::audit::{AuditEntry, CreateAuditEntry};
use daylog_entity::user::{NewUser, User};

use super::audit::AuditRepository;
use crate::store::UserStore;

/// PostgreSQL-backed user store.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
    audits: AuditRepository,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        let audits = AuditRepository::new(pool.clone());
        Self { pool, audits }
    }
}

fn begin_failed(e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
}

fn commit_failed(e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create_user(&self, data: &NewUser, audits: Vec<CreateAuditEntry>) -> AppResult<User> {
        let mut tx = self.pool.begin().await.map_err(begin_failed)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, password_hash) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.id)
        .bind(&data.name)
        .bind(&data.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_pkey") => {
                AppError::conflict(format!("User {} already exists", data.id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })?;

        for entry in &audits {
            AuditRepository::append(&mut *tx, entry).await?;
        }

        tx.commit().await.map_err(commit_failed)?;
        debug!(user_id = %user.id, audits = audits.len(), "User inserted");
        Ok(user)
    }

    async fn find_user(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn update_user(&self, data: &User, audits: Vec<CreateAuditEntry>) -> AppResult<User> {
        let mut tx = self.pool.begin().await.map_err(begin_failed)?;

        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, password_hash = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.name)
        .bind(&data.password_hash)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", data.id)))?;

        for entry in &audits {
            AuditRepository::append(&mut *tx, entry).await?;
        }

        tx.commit().await.map_err(commit_failed)?;
        debug!(user_id = %user.id, audits = audits.len(), "User updated");
        Ok(user)
    }

    async fn audits_for(&self, user_id: UserId) -> AppResult<Vec<AuditEntry>> {
        self.audits.find_for_user(user_id).await
    }
}
