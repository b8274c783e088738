//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use daylog_auth::password::{PasswordHasher, PasswordValidator};
use daylog_auth::{GuardChain, JwtDecoder};
use daylog_core::config::AppConfig;
use daylog_core::result::AppResult;
use daylog_core::traits::Clock;
use daylog_database::Database;
use daylog_service::{EventNotifier, LogService, LogValidator, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Record store handle
    pub database: Database,
    /// Bearer token verifier
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Log use cases
    pub log_service: Arc<LogService>,
    /// User use cases
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wire services from configuration, a store, and event listeners.
    pub fn new(
        config: AppConfig,
        database: Database,
        clock: Arc<dyn Clock>,
        notifier: EventNotifier,
    ) -> AppResult<Self> {
        let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let log_service = Arc::new(LogService::new(
            database.logs(),
            LogValidator::new(&config.rules),
            GuardChain::from_rules(&config.rules),
            Arc::new(notifier),
            clock,
        ));
        let user_service = Arc::new(UserService::new(
            database.users(),
            hasher,
            PasswordValidator::new(&config.auth),
        ));

        Ok(Self {
            config: Arc::new(config),
            database,
            jwt_decoder,
            log_service,
            user_service,
        })
    }
}
