// Settings module

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Application settings loaded from the TOML config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// First day of the countdown window (inclusive).
    pub start_date: NaiveDate,
    /// Day the countdown ends (exclusive).
    pub target_date: NaiveDate,
    /// Seconds between clock ticks refreshing "today".
    pub tick_interval_secs: u64,
    pub theme: String,
    pub use_system_theme: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2025, 11, 14).unwrap(),
            target_date: NaiveDate::from_ymd_opt(2027, 6, 1).unwrap(),
            tick_interval_secs: 60,
            theme: "dark".to_string(),
            use_system_theme: false,
        }
    }
}

impl Settings {
    /// A countdown window is usable only when the start date precedes the target.
    /// An inverted window is not an error; it degrades to an empty wall.
    pub fn has_valid_window(&self) -> bool {
        self.start_date < self.target_date
    }
}
