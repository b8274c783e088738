//! In-process notification of domain events.
//!
//! Listeners run synchronously, in subscription order, after the write
//! they describe has been committed. A failing listener is logged and
//! skipped; it never undoes the write.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use daylog_auth::Principal;
use daylog_core::result::AppResult;
use daylog_entity::log::Log;

/// A log was stored.
#[derive(Debug, Clone, Serialize)]
pub struct LogCreated {
    /// The stored log.
    pub log: Log,
    /// Its owner.
    pub owner: Principal,
}

/// Receives domain events.
#[async_trait]
pub trait EventListener: Send + Sync + std::fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Handle a newly created log.
    async fn on_log_created(&self, event: &LogCreated) -> AppResult<()>;
}

/// Fans events out to subscribed listeners.
#[derive(Debug, Clone, Default)]
pub struct EventNotifier {
    listeners: Vec<Arc<dyn EventListener>>,
}

impl EventNotifier {
    /// Notifier without listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener.
    pub fn subscribe(&mut self, listener: Arc<dyn EventListener>) {
        self.listeners.push(listener);
    }

    /// Builder form of [`EventNotifier::subscribe`].
    pub fn with(mut self, listener: Arc<dyn EventListener>) -> Self {
        self.subscribe(listener);
        self
    }

    /// Number of subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver the event to every listener. Returns how many succeeded.
    pub async fn emit(&self, event: &LogCreated) -> usize {
        let mut delivered = 0;
        for listener in &self.listeners {
            match listener.on_log_created(event).await {
                Ok(()) => delivered += 1,
                Err(e) => warn!(
                    listener = listener.name(),
                    log_id = %event.log.id,
                    error = %e,
                    "Event listener failed"
                ),
            }
        }
        delivered
    }
}

/// Logs every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

#[async_trait]
impl EventListener for TracingListener {
    fn name(&self) -> &'static str {
        "tracing"
    }

    async fn on_log_created(&self, event: &LogCreated) -> AppResult<()> {
        info!(
            log_id = %event.log.id,
            owner_id = %event.owner.user_id,
            owner = %event.owner.name,
            date = %event.log.date,
            "Log created"
        );
        Ok(())
    }
}
