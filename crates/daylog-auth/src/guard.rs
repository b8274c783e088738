//! Create guards.
//!
//! A [`GuardChain`] runs its guards in order before a log is persisted;
//! the first guard that denies ends the check with `Unauthorized`.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use daylog_core::config::RulesConfig;
use daylog_core::error::AppError;

use crate::principal::Principal;

/// A single check consulted before a principal may create a log.
pub trait CreateGuard: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Return `Err` (`Unauthorized`) to deny.
    fn check(&self, principal: &Principal) -> Result<(), AppError>;
}

/// Denies principals whose display name is on a block list.
#[derive(Debug, Clone)]
pub struct BlockedNameGuard {
    names: Vec<String>,
}

impl BlockedNameGuard {
    /// Block the given display names (exact match).
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl CreateGuard for BlockedNameGuard {
    fn name(&self) -> &'static str {
        "blocked_name"
    }

    fn check(&self, principal: &Principal) -> Result<(), AppError> {
        if self.names.iter().any(|blocked| *blocked == principal.name) {
            return Err(AppError::unauthorized("You may not create logs."));
        }
        Ok(())
    }
}

/// Ordered list of create guards.
#[derive(Debug, Clone, Default)]
pub struct GuardChain {
    guards: Vec<Arc<dyn CreateGuard>>,
}

impl GuardChain {
    /// Empty chain; allows everyone.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in chain for the configured rules.
    pub fn from_rules(rules: &RulesConfig) -> Self {
        Self::new().with(BlockedNameGuard::new(rules.blocked_names.clone()))
    }

    /// Append a guard to the end of the chain.
    pub fn with(mut self, guard: impl CreateGuard + 'static) -> Self {
        self.guards.push(Arc::new(guard));
        self
    }

    /// Number of guards.
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Whether the chain has no guards.
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Run every guard in order; the first denial wins.
    pub fn authorize_create(&self, principal: &Principal) -> Result<(), AppError> {
        for guard in &self.guards {
            if let Err(err) = guard.check(principal) {
                warn!(
                    guard = guard.name(),
                    user_id = %principal.user_id,
                    name = %principal.name,
                    "Log creation denied"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}
