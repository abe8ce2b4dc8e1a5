//! Pure date arithmetic for the countdown wall.
//!
//! Everything here is re-derived from the configured start/target dates,
//! today's date, and the marked-days mapping. Nothing is cached or persisted.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::models::day::Day;

/// Serialize a calendar date as a `YYYY-MM-DD` mapping key.
/// Time-of-day and timezone are discarded by construction.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` mapping key back into a date.
/// Returns `None` for stray keys that never were dates.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Number of whole days from `start` to `target`, floored at 0.
/// An inverted window collapses to an empty countdown.
pub fn total_days(start: NaiveDate, target: NaiveDate) -> i64 {
    (target - start).num_days().max(0)
}

/// Number of whole days from `start` to `today`, floored at 0.
pub fn days_passed(start: NaiveDate, today: NaiveDate) -> i64 {
    (today - start).num_days().max(0)
}

/// Count of marked entries whose key is a date inside `[start, target)`.
///
/// Stray keys (unparseable, or outside the window) are never counted, so
/// polluted storage cannot shrink the remaining-days figure.
pub fn marked_count(marked_days: &BTreeMap<String, bool>, start: NaiveDate, target: NaiveDate) -> i64 {
    marked_days
        .iter()
        .filter(|(_, marked)| **marked)
        .filter_map(|(key, _)| parse_date_key(key))
        .filter(|date| *date >= start && *date < target)
        .count() as i64
}

/// Days still unmarked inside the window, never negative.
pub fn days_remaining(total: i64, marked: i64) -> i64 {
    (total - marked).max(0)
}

/// Derive the full day sequence: one record per offset in `[0, total)`.
///
/// Index 0 is the start date and carries the highest ordinal; the countdown
/// number descends toward the target. A day at exactly `days_passed` offsets
/// from the start is the current day and already counts as reached.
pub fn build_day_sequence(
    start: NaiveDate,
    total: i64,
    days_passed: i64,
    marked_days: &BTreeMap<String, bool>,
) -> Vec<Day> {
    (0..total)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let date_key = date_key(date);
            let is_marked = marked_days.get(&date_key).copied().unwrap_or(false);
            Day {
                ordinal: total - offset,
                date,
                date_key,
                is_past: offset <= days_passed,
                is_marked,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn default_window() -> (NaiveDate, NaiveDate) {
        (date(2025, 11, 14), date(2027, 6, 1))
    }

    #[test]
    fn date_key_is_iso_calendar_date() {
        assert_eq!(date_key(date(2025, 11, 14)), "2025-11-14");
        assert_eq!(date_key(date(2027, 6, 1)), "2027-06-01");
    }

    #[test]
    fn parse_date_key_rejects_garbage() {
        assert_eq!(parse_date_key("2025-11-14"), Some(date(2025, 11, 14)));
        assert_eq!(parse_date_key("not-a-date"), None);
        assert_eq!(parse_date_key("2025-13-40"), None);
        assert_eq!(parse_date_key(""), None);
    }

    #[test]
    fn total_days_matches_reference_window() {
        let (start, target) = default_window();
        assert_eq!(total_days(start, target), 564);
    }

    #[test_case(date(2027, 6, 1), date(2025, 11, 14) => 0 ; "inverted window collapses")]
    #[test_case(date(2025, 11, 14), date(2025, 11, 14) => 0 ; "empty window")]
    #[test_case(date(2025, 11, 14), date(2025, 11, 15) => 1 ; "single day")]
    fn total_days_edge_cases(start: NaiveDate, target: NaiveDate) -> i64 {
        total_days(start, target)
    }

    #[test_case(date(2025, 11, 14) => 0 ; "on start date")]
    #[test_case(date(2025, 11, 10) => 0 ; "before start floors at zero")]
    #[test_case(date(2025, 11, 20) => 6 ; "six days in")]
    fn days_passed_cases(today: NaiveDate) -> i64 {
        days_passed(date(2025, 11, 14), today)
    }

    #[test]
    fn marked_count_ignores_out_of_window_and_garbage_keys() {
        let (start, target) = default_window();
        let mut marked = BTreeMap::new();
        marked.insert("2025-11-14".to_string(), true); // in window
        marked.insert("2026-01-01".to_string(), true); // in window
        marked.insert("2025-11-13".to_string(), true); // before start
        marked.insert("2027-06-01".to_string(), true); // target itself is excluded
        marked.insert("2027-07-04".to_string(), true); // after target
        marked.insert("garbage".to_string(), true); // stray key
        marked.insert("2026-02-02".to_string(), false); // falsy entry

        assert_eq!(marked_count(&marked, start, target), 2);
    }

    #[test]
    fn days_remaining_never_negative() {
        assert_eq!(days_remaining(564, 0), 564);
        assert_eq!(days_remaining(564, 1), 563);
        assert_eq!(days_remaining(10, 10), 0);
        assert_eq!(days_remaining(10, 25), 0);
    }

    #[test]
    fn sequence_length_equals_total_days() {
        let (start, target) = default_window();
        let total = total_days(start, target);
        let days = build_day_sequence(start, total, 0, &BTreeMap::new());
        assert_eq!(days.len() as i64, total);
    }

    #[test]
    fn sequence_starts_at_start_date_with_highest_ordinal() {
        let (start, target) = default_window();
        let total = total_days(start, target);
        let days = build_day_sequence(start, total, 0, &BTreeMap::new());

        assert_eq!(days[0].date, start);
        assert_eq!(days[0].ordinal, 564);
        assert_eq!(days[0].date_key, "2025-11-14");
        let last = days.last().unwrap();
        assert_eq!(last.ordinal, 1);
        assert_eq!(last.date, target - Duration::days(1));
    }

    #[test]
    fn current_day_counts_as_reached() {
        let start = date(2025, 11, 14);
        let days = build_day_sequence(start, 10, 3, &BTreeMap::new());

        // Offsets 0..=3 are reached, including the current day at offset 3.
        assert!(days[3].is_past);
        assert!(!days[4].is_past);
    }

    #[test]
    fn sequence_picks_up_marked_flags() {
        let start = date(2025, 11, 14);
        let mut marked = BTreeMap::new();
        marked.insert("2025-11-16".to_string(), true);

        let days = build_day_sequence(start, 10, 0, &marked);
        assert!(days[2].is_marked);
        assert!(!days[1].is_marked);
    }

    #[test]
    fn one_marked_day_decrements_remaining() {
        let (start, target) = default_window();
        let total = total_days(start, target);
        let mut marked = BTreeMap::new();
        assert_eq!(days_remaining(total, marked_count(&marked, start, target)), 564);

        marked.insert("2025-11-14".to_string(), true);
        assert_eq!(days_remaining(total, marked_count(&marked, start, target)), 563);
    }
}
