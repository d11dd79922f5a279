use eframe::egui::{Color32, Frame, Margin, Stroke};

/// One palette of UI colors; the app carries a light and a dark instance.
#[derive(Clone, Copy)]
pub struct UiColors {
    pub heading: Color32,
    pub label: Color32,
    pub subdued: Color32,
    pub price: Color32,
    pub accent: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card_fill: Color32,
    pub card_stroke: Color32,
}

/// Main UI configuration struct holding both display-mode palettes.
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub dark: UiColors,
    pub light: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    dark: UiColors {
        heading: Color32::from_rgb(240, 240, 240),
        label: Color32::GRAY,
        subdued: Color32::from_rgb(130, 130, 140),
        price: Color32::from_rgb(130, 220, 160),
        accent: Color32::from_rgb(110, 170, 255),
        central_panel: Color32::from_rgb(24, 24, 28),
        side_panel: Color32::from_rgb(32, 32, 38),
        card_fill: Color32::from_rgb(38, 38, 46),
        card_stroke: Color32::from_rgb(60, 60, 72),
    },
    light: UiColors {
        heading: Color32::from_rgb(30, 30, 35),
        label: Color32::from_rgb(70, 70, 80),
        subdued: Color32::from_rgb(130, 130, 140),
        price: Color32::from_rgb(20, 130, 70),
        accent: Color32::from_rgb(35, 105, 210),
        central_panel: Color32::from_rgb(248, 248, 250),
        side_panel: Color32::from_rgb(238, 238, 242),
        card_fill: Color32::WHITE,
        card_stroke: Color32::from_rgb(210, 210, 218),
    },
};

impl UiConfig {
    /// Palette for the active display mode.
    pub fn colors(&self, dark_mode: bool) -> &UiColors {
        if dark_mode { &self.dark } else { &self.light }
    }

    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self, dark_mode: bool) -> Frame {
        Frame {
            fill: self.colors(dark_mode).side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the list / detail area
    pub fn central_panel_frame(&self, dark_mode: bool) -> Frame {
        Frame {
            fill: self.colors(dark_mode).central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }
}
