//! Periodic clock driving the "today" refresh and the auto-mark check.
//!
//! The app polls the ticker once per frame with the current wall-clock and
//! schedules the next repaint for `next_due_in`, so the window wakes up
//! without user input. Ticks are only reported while the ticker is running;
//! after `stop()` nothing fires, so a torn-down store is never touched.

use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Local};

pub struct ClockTicker {
    interval: Duration,
    next_due_at: Option<DateTime<Local>>,
}

impl ClockTicker {
    pub fn new(interval_secs: u64) -> Self {
        Self {
            interval: Duration::seconds(interval_secs.max(1) as i64),
            next_due_at: None,
        }
    }

    /// Arm the ticker; the first tick comes one interval after `now`.
    pub fn start_at(&mut self, now: DateTime<Local>) {
        self.next_due_at = Some(now + self.interval);
    }

    /// Disarm the ticker. Subsequent polls report no ticks.
    pub fn stop(&mut self) {
        self.next_due_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due_at.is_some()
    }

    /// Report whether a tick is due at `now` and, if so, schedule the next one.
    /// At most one tick is reported per poll regardless of elapsed time.
    pub fn poll_at(&mut self, now: DateTime<Local>) -> bool {
        let Some(due_at) = self.next_due_at else {
            return false;
        };
        if now < due_at {
            return false;
        }

        self.next_due_at = Some(now + self.interval);
        true
    }

    /// Time until the next tick, clamped to zero once due.
    pub fn next_due_in(&self, now: DateTime<Local>) -> Option<StdDuration> {
        self.next_due_at.map(|due_at| {
            let delta = due_at - now;
            if delta <= Duration::zero() {
                StdDuration::from_secs(0)
            } else {
                delta.to_std().unwrap_or_else(|_| StdDuration::from_secs(0))
            }
        })
    }
}
