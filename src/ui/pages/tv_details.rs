//! TV show details page - placeholder until TV lookups ship

use egui::{RichText, Ui};

use crate::ui::theme::Theme;

pub fn render(ui: &mut Ui) {
    ui.add_space(16.0);

    ui.label(
        RichText::new("TV Show Details")
            .size(24.0)
            .strong()
            .color(Theme::TEXT_PRIMARY),
    );

    ui.add_space(8.0);

    ui.label(RichText::new("TV show details page coming soon..."));
}
