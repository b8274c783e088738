//! Backend selection for the record store.

use std::sync::Arc;

use tracing::info;

use daylog_core::config::{DatabaseBackend, DatabaseConfig};
use daylog_core::result::AppResult;
use daylog_core::traits::Clock;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{LogRepository, UserRepository};
use crate::store::{LogStore, UserStore};

/// Handle to whichever store backend is configured.
#[derive(Debug, Clone)]
pub struct Database {
    users: Arc<dyn UserStore>,
    logs: Arc<dyn LogStore>,
    pool: Option<DatabasePool>,
}

impl Database {
    /// Build the configured backend, running migrations for PostgreSQL
    /// when enabled.
    pub async fn connect(config: &DatabaseConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::Memory => Ok(Self::in_memory(clock)),
            DatabaseBackend::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                info!("Record store backend: postgres");
                Ok(Self {
                    users: Arc::new(UserRepository::new(pool.pool().clone())),
                    logs: Arc::new(LogRepository::new(pool.pool().clone())),
                    pool: Some(pool),
                })
            }
        }
    }

    /// Fresh in-memory backend.
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        info!("Record store backend: memory");
        let store = MemoryStore::new(clock);
        Self {
            users: Arc::new(store.clone()),
            logs: Arc::new(store),
            pool: None,
        }
    }

    /// User store.
    pub fn users(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.users)
    }

    /// Log store.
    pub fn logs(&self) -> Arc<dyn LogStore> {
        Arc::clone(&self.logs)
    }

    /// Whether the backend is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
