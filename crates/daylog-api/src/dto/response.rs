//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use daylog_entity::audit::{AuditEntry, AuditEvent, WatchedAttribute};
use daylog_entity::log::Log;
use daylog_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Liveness report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" or "degraded".
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Whether the record store answered.
    pub database: bool,
}

/// User as shown to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name (title case).
    pub name: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
    /// Last change.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_uuid(),
            name: user.display_name(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Log as shown to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogResponse {
    /// Log ID.
    pub id: Uuid,
    /// Owner ID.
    pub user_id: Uuid,
    /// Entry body.
    pub text: String,
    /// Calendar date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last change.
    pub updated_at: DateTime<Utc>,
    /// Deletion marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Log> for LogResponse {
    fn from(log: Log) -> Self {
        Self {
            id: log.id.into_uuid(),
            user_id: log.user_id.into_uuid(),
            text: log.text,
            date: log.date,
            created_at: log.created_at,
            updated_at: log.updated_at,
            deleted_at: log.deleted_at,
        }
    }
}

/// Audit entry as shown to clients. Credential hashes are withheld.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResponse {
    /// Entry ID.
    pub id: Uuid,
    /// Who made the change.
    pub actor_id: Option<Uuid>,
    /// `created` or `updated`.
    pub event: AuditEvent,
    /// `name` or `password`.
    pub attribute: WatchedAttribute,
    /// Previous value.
    pub old_value: Option<String>,
    /// New value.
    pub new_value: Option<String>,
    /// When the change was committed.
    pub created_at: DateTime<Utc>,
}

impl From<AuditEntry> for AuditResponse {
    fn from(entry: AuditEntry) -> Self {
        let visible = entry.attribute != WatchedAttribute::Password;
        Self {
            id: entry.id.into_uuid(),
            actor_id: entry.actor_id.map(|id| id.into_uuid()),
            event: entry.event,
            attribute: entry.attribute,
            old_value: entry.old_value.filter(|_| visible),
            new_value: entry.new_value.filter(|_| visible),
            created_at: entry.created_at,
        }
    }
}
