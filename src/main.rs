//! Daylog server: daily logs with ownership rules and an audited user trail.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use daylog_core::config::AppConfig;
use daylog_core::error::AppError;
use daylog_core::traits::{Clock, SystemClock};
use daylog_database::Database;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `DAYLOG_ENV` overlay, and `DAYLOG__*` variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("DAYLOG_ENV").unwrap_or_else(|_| "development".to_string());
    let dir = std::env::var("DAYLOG_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    AppConfig::load_from(&dir, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Build the clock and record store, then serve until shutdown.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.database.backend,
        utc_offset_minutes = config.clock.utc_offset_minutes,
        "Starting Daylog"
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(&config.clock)?);
    let database = Database::connect(&config.database, Arc::clone(&clock)).await?;

    daylog_api::run_server(config, database, clock).await
}
