//! Daily log handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::dto::request::{ListLogsQuery, TrashedQuery};
use crate::dto::response::{ApiResponse, LogResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, LogForm, parse_log_id};
use crate::state::AppState;

/// GET /api/logs
pub async fn list_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListLogsQuery>,
) -> Result<Json<ApiResponse<Vec<LogResponse>>>, ApiError> {
    let logs = state.log_service.list(&auth, query.into()).await?;
    Ok(Json(ApiResponse::ok(
        logs.into_iter().map(LogResponse::from).collect(),
    )))
}

/// POST /api/logs
pub async fn create_log(
    State(state): State<AppState>,
    auth: AuthUser,
    LogForm(submission): LogForm,
) -> Result<(StatusCode, Json<ApiResponse<LogResponse>>), ApiError> {
    let log = state.log_service.create(&auth, &submission).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(log.into()))))
}

/// GET /api/logs/{id}
pub async fn get_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Query(query): Query<TrashedQuery>,
) -> Result<Json<ApiResponse<LogResponse>>, ApiError> {
    let id = parse_log_id(&id)?;
    let log = state.log_service.show(&auth, id, query.with_trashed).await?;
    Ok(Json(ApiResponse::ok(log.into())))
}

/// PUT /api/logs/{id}
pub async fn update_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    LogForm(submission): LogForm,
) -> Result<Json<ApiResponse<LogResponse>>, ApiError> {
    let id = parse_log_id(&id)?;
    let log = state.log_service.update(&auth, id, &submission).await?;
    Ok(Json(ApiResponse::ok(log.into())))
}

/// DELETE /api/logs/{id}
pub async fn delete_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_log_id(&id)?;
    state.log_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/logs/{id}/restore
pub async fn restore_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<LogResponse>>, ApiError> {
    let id = parse_log_id(&id)?;
    let log = state.log_service.restore(&auth, id).await?;
    Ok(Json(ApiResponse::ok(log.into())))
}
