// Derived day record for the countdown wall

use chrono::NaiveDate;

/// One cell of the countdown wall, re-derived on every recompute.
/// Never persisted; stored state lives in the day-state mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    /// Descending countdown number: highest at the start date, lowest near the target.
    pub ordinal: i64,
    pub date: NaiveDate,
    /// The date serialized as `YYYY-MM-DD`, used as the mapping key.
    pub date_key: String,
    /// Whether this day has been reached (the current day counts as reached).
    pub is_past: bool,
    pub is_marked: bool,
}
