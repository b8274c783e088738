//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use daylog_service::{ListLogs, RegisterUser, UpdateUser};

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Name.
    #[serde(default)]
    #[validate(length(max = 255, message = "The name may not be greater than 255 characters."))]
    pub name: String,
    /// Plaintext password.
    #[serde(default)]
    #[validate(length(max = 255, message = "The password may not be greater than 255 characters."))]
    pub password: String,
}

impl From<RegisterRequest> for RegisterUser {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name,
            password: req.password,
        }
    }
}

/// Profile update request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New name.
    #[validate(length(max = 255, message = "The name may not be greater than 255 characters."))]
    pub name: Option<String>,
    /// New plaintext password.
    #[validate(length(max = 255, message = "The password may not be greater than 255 characters."))]
    pub password: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateUser {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            password: req.password,
        }
    }
}

/// `GET /api/logs` query string.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListLogsQuery {
    /// Only logs dated today.
    #[serde(default)]
    pub today: bool,
    /// Include soft-deleted logs.
    #[serde(default)]
    pub with_trashed: bool,
}

impl From<ListLogsQuery> for ListLogs {
    fn from(query: ListLogsQuery) -> Self {
        Self {
            today: query.today,
            with_trashed: query.with_trashed,
        }
    }
}

/// `GET /api/logs/{id}` query string.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TrashedQuery {
    /// Also find soft-deleted logs.
    #[serde(default)]
    pub with_trashed: bool,
}
