//! Theme module for the egui countdown application
//!
//! Defines the CountdownTheme structure with all colors used by the day wall.

use egui::Color32;

/// A theme defining all colors used in the application
#[derive(Debug, Clone)]
pub struct CountdownTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Header panel background color
    pub header_background: Color32,

    /// Header text color
    pub header_text: Color32,

    /// Accent color for the days-remaining statistic
    pub accent: Color32,

    /// Regular day cell background color
    pub day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Marked day background color
    pub marked_background: Color32,

    /// Marked day border color
    pub marked_border: Color32,

    /// Border color for days carrying a link
    pub link_border: Color32,

    /// Translucent overlay painted over days already reached
    pub past_overlay: Color32,

    /// Primary text color (ordinals)
    pub text_primary: Color32,

    /// Secondary text color (cell dates)
    pub text_secondary: Color32,
}

impl CountdownTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            header_background: Color32::from_rgb(235, 235, 238),
            header_text: Color32::from_rgb(40, 40, 40),
            accent: Color32::from_rgb(40, 100, 180),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            marked_background: Color32::from_rgb(214, 240, 218),
            marked_border: Color32::from_rgb(88, 160, 100),
            link_border: Color32::from_rgb(100, 150, 255),
            past_overlay: Color32::from_rgba_unmultiplied(120, 120, 120, 60),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            header_background: Color32::from_rgb(24, 24, 26),
            header_text: Color32::from_rgb(240, 240, 240),
            accent: Color32::from_rgb(100, 180, 255),
            day_background: Color32::from_rgb(44, 44, 46),
            day_border: Color32::from_rgb(64, 64, 66),
            marked_background: Color32::from_rgb(38, 70, 46),
            marked_border: Color32::from_rgb(90, 170, 105),
            link_border: Color32::from_rgb(100, 150, 255),
            past_overlay: Color32::from_rgba_unmultiplied(0, 0, 0, 90),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    /// Apply this theme's base visuals to the egui context.
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.app_background;
        visuals.window_fill = self.app_background;
        ctx.set_visuals(visuals);
    }
}
