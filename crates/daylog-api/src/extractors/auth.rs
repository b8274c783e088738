//! `AuthUser` extractor: verifies the bearer token and loads the acting user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use daylog_core::error::AppError;
use daylog_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated request context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::unauthorized("Missing or malformed bearer token"))?;

        let claims = state.jwt_decoder.decode_access_token(bearer.token())?;

        // Guards must see the current stored name, not the one in the token.
        let user = state
            .database
            .users()
            .find_user(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("Token subject no longer exists"))?;

        Ok(AuthUser(RequestContext::for_user(&user)))
    }
}
