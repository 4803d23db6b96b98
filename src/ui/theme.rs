//! Theme and styling for the UI

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// Application color palette
pub struct Theme;

impl Theme {
    // Primary colors - Material blue
    pub const PRIMARY: Color32 = Color32::from_rgb(25, 118, 210); // #1976d2
    pub const PRIMARY_DARK: Color32 = Color32::from_rgb(21, 101, 192); // #1565c0
    pub const PRIMARY_LIGHT: Color32 = Color32::from_rgb(66, 165, 245); // #42a5f5

    // Secondary accent - Material crimson
    pub const SECONDARY: Color32 = Color32::from_rgb(220, 0, 78); // #dc004e

    // Status colors
    pub const SUCCESS: Color32 = Color32::from_rgb(46, 125, 50); // #2e7d32
    pub const WARNING: Color32 = Color32::from_rgb(237, 108, 2); // #ed6c02
    pub const ERROR: Color32 = Color32::from_rgb(211, 47, 47); // #d32f2f
    pub const INFO: Color32 = Color32::from_rgb(2, 136, 209); // #0288d1

    // Surfaces
    pub const BG_DEFAULT: Color32 = Color32::from_rgb(250, 250, 250); // #fafafa
    pub const BG_PAPER: Color32 = Color32::WHITE;
    pub const BG_SUBTLE: Color32 = Color32::from_rgb(245, 245, 245); // #f5f5f5
    pub const BG_HOVER: Color32 = Color32::from_rgb(238, 238, 238); // #eeeeee

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(33, 33, 33); // #212121
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(97, 97, 97); // #616161
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(158, 158, 158); // #9e9e9e

    // Borders
    pub const BORDER: Color32 = Color32::from_rgb(224, 224, 224); // #e0e0e0

    /// Apply the light theme to egui
    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let mut visuals = Visuals::light();

        visuals.panel_fill = Self::BG_DEFAULT;
        visuals.window_fill = Self::BG_PAPER;
        visuals.extreme_bg_color = Self::BG_PAPER;
        visuals.faint_bg_color = Self::BG_SUBTLE;

        // Non-interactive widgets (labels, etc.)
        visuals.widgets.noninteractive.bg_fill = Self::BG_SUBTLE;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.5, Self::BORDER);
        visuals.widgets.noninteractive.rounding = Rounding::same(6.0);

        // Inactive interactive widgets (buttons at rest)
        visuals.widgets.inactive.bg_fill = Self::BG_SUBTLE;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.bg_stroke = Stroke::new(0.5, Self::BORDER);
        visuals.widgets.inactive.rounding = Rounding::same(6.0);

        // Hovered widgets
        visuals.widgets.hovered.bg_fill = Self::BG_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.7));
        visuals.widgets.hovered.rounding = Rounding::same(6.0);
        visuals.widgets.hovered.expansion = 1.0;

        // Active/pressed widgets
        visuals.widgets.active.bg_fill = Self::PRIMARY;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, Self::PRIMARY_DARK);
        visuals.widgets.active.rounding = Rounding::same(6.0);

        // Open widgets (like ComboBox when open)
        visuals.widgets.open.bg_fill = Self::BG_PAPER;
        visuals.widgets.open.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.6));
        visuals.widgets.open.rounding = Rounding::same(6.0);

        // Selection colors
        visuals.selection.bg_fill = Self::PRIMARY.linear_multiply(0.15);
        visuals.selection.stroke = Stroke::new(1.0, Self::PRIMARY);

        // Window styling
        visuals.window_rounding = Rounding::same(10.0);
        visuals.window_stroke = Stroke::new(0.5, Self::BORDER);
        visuals.window_shadow = egui::Shadow {
            offset: egui::vec2(0.0, 8.0),
            blur: 24.0,
            spread: 4.0,
            color: Color32::from_black_alpha(20),
        };

        // Popup shadow
        visuals.popup_shadow = egui::Shadow {
            offset: egui::vec2(0.0, 4.0),
            blur: 12.0,
            spread: 2.0,
            color: Color32::from_black_alpha(15),
        };

        visuals.menu_rounding = Rounding::same(8.0);
        visuals.striped = true;

        style.visuals = visuals;

        // Set up text styles with good readability
        style.text_styles = [
            (
                TextStyle::Small,
                FontId::new(12.0, FontFamily::Proportional),
            ),
            (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
            (
                TextStyle::Button,
                FontId::new(14.0, FontFamily::Proportional),
            ),
            (
                TextStyle::Heading,
                FontId::new(20.0, FontFamily::Proportional),
            ),
            (
                TextStyle::Monospace,
                FontId::new(13.0, FontFamily::Monospace),
            ),
        ]
        .into();

        // Set spacing for comfortable click targets
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.window_margin = egui::Margin::same(16.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.indent = 20.0;

        style.interaction.tooltip_delay = 0.3;

        ctx.set_style(style);
    }
}
