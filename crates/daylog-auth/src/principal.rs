//! The acting user.

use serde::{Deserialize, Serialize};

use daylog_core::types::UserId;
use daylog_entity::user::User;

/// Who is performing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The user's id.
    pub user_id: UserId,
    /// The user's display name (title case).
    pub name: String,
}

impl Principal {
    /// Build a principal with an explicit display name.
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
        }
    }

    /// Principal for a stored user, using the normalized display name.
    pub fn from_user(user: &User) -> Self {
        Self::new(user.id, user.display_name())
    }
}
