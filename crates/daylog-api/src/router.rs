//! Route definitions for the Daylog HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with every route and the request logger.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(user_routes())
        .merge(log_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Registration and self-service
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::register))
        .route(
            "/users/me",
            get(handlers::user::get_profile).put(handlers::user::update_profile),
        )
        .route("/users/me/audits", get(handlers::user::list_audits))
}

/// Daily log CRUD
fn log_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/logs",
            get(handlers::log::list_logs).post(handlers::log::create_log),
        )
        .route(
            "/logs/{id}",
            get(handlers::log::get_log)
                .put(handlers::log::update_log)
                .delete(handlers::log::delete_log),
        )
        .route("/logs/{id}/restore", post(handlers::log::restore_log))
}
