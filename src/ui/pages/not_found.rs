//! 404 page - catch-all for unknown paths

use egui::{Color32, RichText, Ui};

use crate::ui::route::Route;
use crate::ui::theme::Theme;

/// Render the 404 page. Returns a route when the user asks to leave it.
pub fn render(ui: &mut Ui) -> Option<Route> {
    let mut next = None;

    ui.add_space(64.0);

    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("404")
                .size(56.0)
                .strong()
                .color(Theme::PRIMARY),
        );

        ui.add_space(8.0);

        ui.label(
            RichText::new("Page Not Found")
                .size(24.0)
                .strong()
                .color(Theme::TEXT_PRIMARY),
        );

        ui.add_space(8.0);

        ui.label(
            RichText::new("The page you're looking for doesn't exist.")
                .color(Theme::TEXT_SECONDARY),
        );

        ui.add_space(24.0);

        let go_home = egui::Button::new(RichText::new("Go Home").color(Color32::WHITE))
            .fill(Theme::PRIMARY)
            .min_size(egui::vec2(120.0, 36.0));
        if ui.add(go_home).clicked() {
            next = Some(Route::Home);
        }
    });

    next
}
