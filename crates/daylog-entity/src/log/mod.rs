//! Daily log domain entities.

pub mod date;
pub mod model;

pub use date::parse_calendar_date;
pub use model::{CreateLog, Log, LogFilter, UpdateLog};
