//! The scrollable wall of day cells.
//!
//! Receives the derived day sequence in engine order (start date first,
//! descending ordinals) and renders it as a wrapped grid. Clicks are
//! forwarded as date keys; the store decides what a click means.

use std::collections::BTreeMap;

use super::day_cell::render_day_cell;
use super::palette::DayCellPalette;
use crate::models::day::Day;

/// Render the day grid, returning the date keys of clicked cells.
pub(crate) fn render_day_grid(
    ui: &mut egui::Ui,
    days: &[Day],
    day_links: &BTreeMap<String, String>,
    palette: DayCellPalette,
) -> Vec<String> {
    let mut clicked_keys = Vec::new();

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
            ui.horizontal_wrapped(|ui| {
                for day in days {
                    let has_link = day_links.contains_key(&day.date_key);
                    if render_day_cell(ui, day, has_link, palette) {
                        clicked_keys.push(day.date_key.clone());
                    }
                }
            });
        });

    clicked_keys
}
