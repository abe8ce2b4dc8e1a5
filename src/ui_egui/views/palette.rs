use egui::Color32;

use crate::ui_egui::theme::CountdownTheme;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub(crate) struct DayCellPalette {
    pub regular_bg: Color32,
    pub marked_bg: Color32,
    pub border: Color32,
    pub marked_border: Color32,
    pub link_border: Color32,
    pub past_overlay: Color32,
    pub text: Color32,
    pub date_text: Color32,
    pub hover_border: Color32,
}

impl DayCellPalette {
    pub fn from_theme(theme: &CountdownTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            marked_bg: theme.marked_background,
            border: theme.day_border,
            marked_border: theme.marked_border,
            link_border: theme.link_border,
            past_overlay: theme.past_overlay,
            text: theme.text_primary,
            date_text: theme.text_secondary,
            hover_border: with_alpha(theme.accent, if theme.is_dark { 160 } else { 120 }),
        }
    }
}
