// Integration tests for day-state persistence across app restarts
use chrono::NaiveDate;
use rust_countdown::services::countdown::engine;
use rust_countdown::services::countdown::{DayClickOutcome, DayStateService};
use tempfile::tempdir;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_day_state_persistence() {
    let dir = tempdir().expect("Failed to create temp dir");

    // Simulate first app launch: mark a day and attach a link
    {
        let mut store = DayStateService::load(dir.path());
        assert!(store.marked_days().is_empty());
        assert!(store.day_links().is_empty());

        store.toggle_mark("2025-11-20").expect("Failed to toggle mark");
        store
            .set_link("2025-12-24", Some("https://example.com/eve"))
            .expect("Failed to set link");
    } // Store dropped

    // Simulate second app launch - state should persist
    {
        let store = DayStateService::load(dir.path());
        assert!(store.is_marked("2025-11-20"), "Mark should persist across app restarts");
        assert_eq!(
            store.link_for("2025-12-24"),
            Some("https://example.com/eve"),
            "Link should persist across app restarts"
        );
    }
}

#[test]
fn test_auto_mark_survives_restart_and_stays_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let (start, target) = (date(2025, 11, 14), date(2027, 6, 1));
    let today = date(2026, 1, 10);

    {
        let mut store = DayStateService::load(dir.path());
        assert!(store.auto_mark_elapsed(today, start, target).unwrap());
        assert!(store.is_marked("2026-01-09"));
    }

    // After a restart the same tick is a no-op
    {
        let mut store = DayStateService::load(dir.path());
        assert!(!store.auto_mark_elapsed(today, start, target).unwrap());
        assert!(store.is_marked("2026-01-09"));
    }
}

#[test]
fn test_clicking_a_linked_day_does_not_toggle() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = DayStateService::load(dir.path());

    store
        .set_link("2026-05-01", Some("https://example.com/may"))
        .expect("Failed to set link");

    let before = store.is_marked("2026-05-01");
    let outcome = store.click_day("2026-05-01").expect("Failed to click");

    assert_eq!(
        outcome,
        DayClickOutcome::OpenLink("https://example.com/may".to_string())
    );
    assert_eq!(store.is_marked("2026-05-01"), before);

    // Removing the link restores toggle behavior
    store.set_link("2026-05-01", None).expect("Failed to clear link");
    let outcome = store.click_day("2026-05-01").expect("Failed to click");
    assert_eq!(outcome, DayClickOutcome::Toggled(true));
}

#[test]
fn test_cold_store_with_garbage_files_stays_usable() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("markedDays.json"), "not even json").unwrap();
    std::fs::write(dir.path().join("dayLinks.json"), "\"a string\"").unwrap();

    let mut store = DayStateService::load(dir.path());
    assert!(store.marked_days().is_empty());
    assert!(store.day_links().is_empty());

    // Mutations still work and overwrite the garbage
    store.toggle_mark("2026-02-02").expect("Failed to toggle");
    let reloaded = DayStateService::load(dir.path());
    assert!(reloaded.is_marked("2026-02-02"));
}

#[test]
fn test_reference_window_counts() {
    let (start, target) = (date(2025, 11, 14), date(2027, 6, 1));
    let total = engine::total_days(start, target);
    assert_eq!(total, 564);

    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = DayStateService::load(dir.path());

    let marked = engine::marked_count(store.marked_days(), start, target);
    assert_eq!(engine::days_remaining(total, marked), 564);

    store.toggle_mark("2025-11-14").expect("Failed to toggle");
    let marked = engine::marked_count(store.marked_days(), start, target);
    assert_eq!(engine::days_remaining(total, marked), 563);
}
