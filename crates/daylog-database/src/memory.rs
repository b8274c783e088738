//! In-memory record store for tests and single-process deployments.
//!
//! Enforces the same constraints as the PostgreSQL schema: a log must
//! reference an existing user, and a user write and its audit entries
//! are applied under one lock so readers never see one without the other.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use daylog_core::error::AppError;
use daylog_core::result::AppResult;
use daylog_core::traits::Clock;
use daylog_core::types::{LogId, UserId};
use daylog_entity::audit::{AuditEntry, CreateAuditEntry};
use daylog_entity::log::{CreateLog, Log, LogFilter, UpdateLog};
use daylog_entity::user::{NewUser, User};

use crate::store::{LogStore, UserStore};

/// Rows held by the store.
#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    logs: Vec<Log>,
    audits: Vec<AuditEntry>,
}

/// Process-local store guarded by a Tokio mutex.
///
/// Clones share the same tables.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    /// Create an empty store stamping rows with the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables::default())),
            clock,
        }
    }
}

fn append_audits(tables: &mut Tables, audits: Vec<CreateAuditEntry>, at: DateTime<Utc>) {
    tables
        .audits
        .extend(audits.into_iter().map(|entry| entry.into_entry(at)));
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, data: &NewUser, audits: Vec<CreateAuditEntry>) -> AppResult<User> {
        let mut tables = self.tables.lock().await;
        if tables.users.contains_key(&data.id) {
            return Err(AppError::conflict(format!("User {} already exists", data.id)));
        }

        let now = self.clock.now();
        let user = User {
            id: data.id,
            name: data.name.clone(),
            password_hash: data.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        append_audits(&mut tables, audits, now);

        debug!(user_id = %user.id, "User inserted");
        Ok(user)
    }

    async fn find_user(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.tables.lock().await.users.get(&id).cloned())
    }

    async fn update_user(&self, data: &User, audits: Vec<CreateAuditEntry>) -> AppResult<User> {
        let mut tables = self.tables.lock().await;
        let now = self.clock.now();

        let user = {
            let stored = tables
                .users
                .get_mut(&data.id)
                .ok_or_else(|| AppError::not_found(format!("User {} not found", data.id)))?;
            stored.name = data.name.clone();
            stored.password_hash = data.password_hash.clone();
            stored.updated_at = now;
            stored.clone()
        };
        append_audits(&mut tables, audits, now);

        debug!(user_id = %user.id, "User updated");
        Ok(user)
    }

    async fn audits_for(&self, user_id: UserId) -> AppResult<Vec<AuditEntry>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .audits
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LogStore for MemoryStore {
    async fn create(&self, data: &CreateLog) -> AppResult<Log> {
        let mut tables = self.tables.lock().await;
        if !tables.users.contains_key(&data.user_id) {
            return Err(AppError::conflict(format!(
                "Owner {} does not exist",
                data.user_id
            )));
        }

        let now = self.clock.now();
        let log = Log {
            id: LogId::new(),
            user_id: data.user_id,
            text: data.text.clone(),
            date: data.date,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        tables.logs.push(log.clone());
        Ok(log)
    }

    async fn find(&self, id: LogId, include_deleted: bool) -> AppResult<Option<Log>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .logs
            .iter()
            .find(|log| log.id == id && (include_deleted || !log.is_deleted()))
            .cloned())
    }

    async fn update(&self, id: LogId, changes: &UpdateLog) -> AppResult<Log> {
        let mut tables = self.tables.lock().await;
        let log = tables
            .logs
            .iter_mut()
            .find(|log| log.id == id && !log.is_deleted())
            .ok_or_else(|| AppError::not_found(format!("Log {id} not found")))?;

        if let Some(text) = &changes.text {
            log.text = text.clone();
        }
        if let Some(date) = changes.date {
            log.date = date;
        }
        log.updated_at = self.clock.now();
        Ok(log.clone())
    }

    async fn soft_delete(&self, id: LogId) -> AppResult<()> {
        let mut tables = self.tables.lock().await;
        let log = tables
            .logs
            .iter_mut()
            .find(|log| log.id == id && !log.is_deleted())
            .ok_or_else(|| AppError::not_found(format!("Log {id} not found")))?;

        log.deleted_at = Some(self.clock.now());
        Ok(())
    }

    async fn restore(&self, id: LogId) -> AppResult<Log> {
        let mut tables = self.tables.lock().await;
        let log = tables
            .logs
            .iter_mut()
            .find(|log| log.id == id)
            .ok_or_else(|| AppError::not_found(format!("Log {id} not found")))?;

        log.deleted_at = None;
        log.updated_at = self.clock.now();
        Ok(log.clone())
    }

    async fn list_for_owner(&self, owner: UserId, filter: &LogFilter) -> AppResult<Vec<Log>> {
        let tables = self.tables.lock().await;
        let mut logs: Vec<Log> = tables
            .logs
            .iter()
            .filter(|log| log.user_id == owner && filter.matches(log))
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(logs)
    }
}
