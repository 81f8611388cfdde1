use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub price: Color32,
    pub rate_live: Color32,
    pub rate_fallback: Color32,
    pub rate_failed: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
    /// Repaint interval while a rate refresh is in flight (ms)
    pub refresh_poll_ms: u64,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 30, 36),
        side_panel: Color32::from_rgb(25, 25, 25),
        price: Color32::from_rgb(130, 200, 140),
        rate_live: Color32::from_rgb(130, 200, 140),
        rate_fallback: Color32::from_rgb(200, 200, 160),
        rate_failed: Color32::from_rgb(220, 120, 120),
    },
    side_panel_min_width: 180.0,
    refresh_poll_ms: 100,
};
