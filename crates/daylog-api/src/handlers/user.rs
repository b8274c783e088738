//! Registration and user self-service handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use crate::dto::request::{RegisterRequest, UpdateProfileRequest};
use crate::dto::response::{ApiResponse, AuditResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate()?;
    let user = state.user_service.register(&req.into()).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// GET /api/users/me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()?;
    let user = state.user_service.update_self(&auth, &req.into()).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/users/me/audits
pub async fn list_audits(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<AuditResponse>>>, ApiError> {
    let audits = state.user_service.audits(&auth, auth.user_id()).await?;
    Ok(Json(ApiResponse::ok(
        audits.into_iter().map(AuditResponse::from).collect(),
    )))
}
