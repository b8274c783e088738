//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use daylog_core::config::AppConfig;
use daylog_core::error::AppError;
use daylog_core::traits::Clock;
use daylog_database::Database;
use daylog_service::{EventNotifier, TracingListener};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Runs the Daylog server until Ctrl+C.
pub async fn run_server(
    config: AppConfig,
    database: Database,
    clock: Arc<dyn Clock>,
) -> Result<(), AppError> {
    info!("Starting Daylog server...");

    let notifier = EventNotifier::new().with(Arc::new(TracingListener));
    let addr = config.server.bind_address();
    let state = AppState::new(config, database.clone(), clock, notifier)?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "Daylog server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    database.close().await;
    info!("Daylog server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
