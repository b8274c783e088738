//! Daily log entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use daylog_core::traits::Clock;
use daylog_core::types::{LogId, UserId};

/// A dated text entry owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Log {
    /// Unique log identifier.
    pub id: LogId,
    /// Owning user.
    pub user_id: UserId,
    /// The entry body.
    pub text: String,
    /// The calendar day the entry is about.
    pub date: NaiveDate,
    /// When the log was created.
    pub created_at: DateTime<Utc>,
    /// When the log was last updated.
    pub updated_at: DateTime<Utc>,
    /// Set when the log is soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Log {
    /// Whether the log has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether the given user owns this log.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Data required to create a log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLog {
    /// Owning user.
    pub user_id: UserId,
    /// Validated body.
    pub text: String,
    /// Validated date.
    pub date: NaiveDate,
}

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLog {
    /// New body.
    pub text: Option<String>,
    /// New date.
    pub date: Option<NaiveDate>,
}

impl UpdateLog {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.date.is_none()
    }
}

/// Which of an owner's logs to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilter {
    /// Only logs dated on this day.
    pub on_date: Option<NaiveDate>,
    /// Also return soft-deleted logs.
    pub include_deleted: bool,
}

impl LogFilter {
    /// Logs dated today according to the clock.
    pub fn today(clock: &dyn Clock) -> Self {
        Self {
            on_date: Some(clock.today()),
            include_deleted: false,
        }
    }

    /// Whether a log passes the filter.
    pub fn matches(&self, log: &Log) -> bool {
        (self.include_deleted || !log.is_deleted())
            && self.on_date.is_none_or(|date| log.date == date)
    }
}
