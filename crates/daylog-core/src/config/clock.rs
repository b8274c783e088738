//! Reference timezone configuration.

use serde::{Deserialize, Serialize};

/// Timezone used to decide which calendar date is "today".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Offset from UTC in minutes (e.g. `540` for JST, `-300` for EST).
    #[serde(default)]
    pub utc_offset_minutes: i32,
}
