//! Search page - placeholder until search ships

use egui::{RichText, Ui};

use crate::ui::theme::Theme;

pub fn render(ui: &mut Ui) {
    ui.add_space(16.0);

    ui.label(
        RichText::new("Search")
            .size(24.0)
            .strong()
            .color(Theme::TEXT_PRIMARY),
    );

    ui.add_space(8.0);

    ui.label(RichText::new("Search functionality coming soon..."));
}
