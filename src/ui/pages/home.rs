//! Home page - landing content

use egui::{RichText, Ui};

use crate::ui::theme::Theme;

pub fn render(ui: &mut Ui) {
    ui.add_space(64.0);

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Welcome to Movie API")
                .size(32.0)
                .strong()
                .color(Theme::TEXT_PRIMARY),
        );

        ui.add_space(12.0);

        ui.label(
            RichText::new("Discover movies and TV shows powered by TMDb")
                .size(18.0)
                .color(Theme::TEXT_SECONDARY),
        );
    });
}
