//! Wall clock abstraction.
//!
//! "Today" depends on the reference timezone, so every date-only query
//! asks a [`Clock`] instead of reading the system time directly.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

use crate::config::ClockConfig;
use crate::error::AppError;

/// Source of the current instant and calendar date.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date in the reference timezone.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time and a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// Create a clock for the configured reference timezone.
    pub fn new(config: &ClockConfig) -> Result<Self, AppError> {
        let offset = config
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "Invalid clock.utc_offset_minutes: {}",
                    config.utc_offset_minutes
                ))
            })?;
        Ok(Self { offset })
    }

    /// Clock in UTC.
    pub fn utc() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// Clock frozen at a given instant, evaluated in UTC.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Freeze the clock at an instant.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Freeze the clock at midnight UTC of the given date.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            now: date.and_time(NaiveTime::MIN).and_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}
