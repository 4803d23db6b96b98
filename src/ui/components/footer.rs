//! Application footer

use egui::{RichText, Ui};

use crate::ui::theme::Theme;

pub fn render(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(6.0);
        ui.label(
            RichText::new("© 2025 Movie API. Powered by TMDb.")
                .small()
                .color(Theme::TEXT_SECONDARY),
        );
        ui.add_space(6.0);
    });
}
