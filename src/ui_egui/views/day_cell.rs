//! Day cell rendering for the countdown wall.
//!
//! Renders one clickable cell per day: countdown ordinal, date, and the
//! composed past/marked/linked visuals. Past, marked, and linked are
//! independent flags, so all applicable treatments paint together.

use egui::{Align2, Pos2, Sense, Stroke, Vec2};

use super::palette::DayCellPalette;
use crate::models::day::Day;
use crate::utils::date::display_date;

pub(super) const CELL_WIDTH: f32 = 72.0;
pub(super) const CELL_HEIGHT: f32 = 58.0;

/// Render a single day cell. Returns true when the cell was clicked.
pub(super) fn render_day_cell(
    ui: &mut egui::Ui,
    day: &Day,
    has_link: bool,
    palette: DayCellPalette,
) -> bool {
    let desired_size = Vec2::new(CELL_WIDTH, CELL_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click());

    if ui.is_rect_visible(rect) {
        // Background
        let bg_color = if day.is_marked {
            palette.marked_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 4.0, bg_color);

        // Border: a link outranks the marked accent
        let (border_color, border_width) = if has_link {
            (palette.link_border, 2.0)
        } else if day.is_marked {
            (palette.marked_border, 1.5)
        } else {
            (palette.border, 1.0)
        };
        ui.painter()
            .rect_stroke(rect, 4.0, Stroke::new(border_width, border_color));

        // Countdown ordinal
        ui.painter().text(
            Pos2::new(rect.center().x, rect.top() + 20.0),
            Align2::CENTER_CENTER,
            day.ordinal.to_string(),
            egui::FontId::proportional(18.0),
            palette.text,
        );

        // Calendar date
        ui.painter().text(
            Pos2::new(rect.center().x, rect.bottom() - 14.0),
            Align2::CENTER_CENTER,
            display_date(day.date),
            egui::FontId::proportional(10.0),
            palette.date_text,
        );

        // Reached days get dimmed on top of whatever else applies
        if day.is_past {
            ui.painter().rect_filled(rect, 4.0, palette.past_overlay);
        }

        if response.hovered() {
            ui.painter()
                .rect_stroke(rect, 4.0, Stroke::new(2.0, palette.hover_border));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }

    let tooltip = if has_link {
        format!("{}\n🔗 Link available", display_date(day.date))
    } else {
        display_date(day.date)
    };
    let response = response.on_hover_text(tooltip);

    response.clicked()
}
