// Date utility functions

use chrono::{Local, NaiveDate};

/// Today's calendar date in local wall-clock time.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date for display in day cells and tooltips (DD/MM/YYYY).
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
