//! Header panel showing the countdown title and the days-remaining statistic.

use chrono::Datelike;
use egui::RichText;

use super::CountdownApp;
use crate::services::countdown::engine;

impl CountdownApp {
    /// Render the header bar at the top of the window
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        let theme = self.active_theme.clone();

        let total = engine::total_days(self.settings.start_date, self.settings.target_date);
        let marked = engine::marked_count(
            self.day_state.marked_days(),
            self.settings.start_date,
            self.settings.target_date,
        );
        let remaining = engine::days_remaining(total, marked);

        egui::TopBottomPanel::top("header")
            .exact_height(56.0)
            .frame(egui::Frame::default().fill(theme.header_background))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.add_space(12.0);
                    let title = format!("Countdown → {}", self.settings.target_date.year());
                    ui.label(RichText::new(title).heading().color(theme.header_text));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(12.0);
                        ui.label(
                            RichText::new("days remaining")
                                .small()
                                .color(theme.text_secondary),
                        );
                        ui.add_space(6.0);
                        ui.label(
                            RichText::new(remaining.to_string())
                                .size(28.0)
                                .strong()
                                .color(theme.accent),
                        );
                    });
                });
            });
    }
}
