//! TTL Presets
//!
//! Named lifetimes that data-access code picks from instead of spelling out
//! durations.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const SHORT: Duration = Duration::from_secs(30);
pub const MEDIUM: Duration = Duration::from_secs(60);
pub const LONG: Duration = Duration::from_secs(300);
pub const VERY_LONG: Duration = Duration::from_secs(600);
pub const HOUR: Duration = Duration::from_secs(3600);

// == TTL Preset ==
/// A named TTL, as accepted by the admin API (`"short"`, `"very_long"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtlPreset {
    Short,
    Medium,
    Long,
    VeryLong,
    Hour,
}

impl TtlPreset {
    pub fn duration(self) -> Duration {
        match self {
            TtlPreset::Short => SHORT,
            TtlPreset::Medium => MEDIUM,
            TtlPreset::Long => LONG,
            TtlPreset::VeryLong => VERY_LONG,
            TtlPreset::Hour => HOUR,
        }
    }
}

impl From<TtlPreset> for Duration {
    fn from(preset: TtlPreset) -> Self {
        preset.duration()
    }
}
