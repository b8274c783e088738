//! Audit trail entry entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use daylog_core::types::{AuditEntryId, UserId};

/// The user mutation that produced an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "audit_event", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuditEvent {
    /// The user was registered.
    Created,
    /// An existing user was changed.
    Updated,
}

impl AuditEvent {
    /// Return the event as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user attribute whose changes are audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "audit_attribute", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WatchedAttribute {
    /// The user's name.
    Name,
    /// The user's credential hash.
    Password,
}

impl WatchedAttribute {
    /// Every watched attribute, in audit order.
    pub const ALL: [WatchedAttribute; 2] = [Self::Name, Self::Password];

    /// Return the attribute as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for WatchedAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable record of one watched attribute changing on one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AuditEntry {
    /// Unique audit entry identifier.
    pub id: AuditEntryId,
    /// The user whose attribute changed.
    pub user_id: UserId,
    /// Who made the change, when known.
    pub actor_id: Option<UserId>,
    /// Registration or update.
    pub event: AuditEvent,
    /// The attribute that changed.
    pub attribute: WatchedAttribute,
    /// Value before the change (`None` on registration).
    pub old_value: Option<String>,
    /// Value after the change.
    pub new_value: Option<String>,
    /// When the change was committed.
    pub created_at: DateTime<Utc>,
}

/// Data required to append an audit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAuditEntry {
    /// The user whose attribute changed.
    pub user_id: UserId,
    /// Who made the change.
    pub actor_id: Option<UserId>,
    /// Registration or update.
    pub event: AuditEvent,
    /// The attribute that changed.
    pub attribute: WatchedAttribute,
    /// Previous value.
    pub old_value: Option<String>,
    /// New value.
    pub new_value: Option<String>,
}

impl CreateAuditEntry {
    /// Materialize the entry with a fresh id and timestamp.
    pub fn into_entry(self, created_at: DateTime<Utc>) -> AuditEntry {
        AuditEntry {
            id: AuditEntryId::new(),
            user_id: self.user_id,
            actor_id: self.actor_id,
            event: self.event,
            attribute: self.attribute,
            old_value: self.old_value,
            new_value: self.new_value,
            created_at,
        }
    }
}
