//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use daylog_core::types::UserId;

use super::transform::title_case;
use crate::audit::WatchedAttribute;

/// A registered user who owns daily logs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Name exactly as stored; read through [`User::display_name`].
    pub name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The name as presented to readers (title case).
    pub fn display_name(&self) -> String {
        title_case(&self.name)
    }

    /// Current stored value of a watched attribute.
    pub fn attribute(&self, attribute: WatchedAttribute) -> &str {
        match attribute {
            WatchedAttribute::Name => &self.name,
            WatchedAttribute::Password => &self.password_hash,
        }
    }
}

/// Data required to create a new user.
///
/// The password must already be hashed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Identifier to assign.
    pub id: UserId,
    /// Name as entered.
    pub name: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
