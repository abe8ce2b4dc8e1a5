mod header;
mod lifecycle;

use chrono::NaiveDate;

use crate::models::settings::Settings;
use crate::services::countdown::{ClockTicker, DayStateService};
use crate::ui_egui::theme::CountdownTheme;

pub struct CountdownApp {
    /// Core application settings loaded at startup
    settings: Settings,
    /// The persisted marked-days and day-links mappings
    day_state: DayStateService,
    /// Owns the periodic "now" refresh; stopped on teardown
    ticker: ClockTicker,
    /// Currently applied theme colors
    active_theme: CountdownTheme,
    /// Today's date as of the most recent tick
    today: NaiveDate,
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
