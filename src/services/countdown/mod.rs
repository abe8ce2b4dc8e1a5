pub mod engine;
mod persistence;
mod service;
mod ticker;

pub use service::{DayClickOutcome, DayStateService, DAY_LINKS_KEY, MARKED_DAYS_KEY};
pub use ticker::ClockTicker;
