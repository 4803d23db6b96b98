//! Application header with navigation

use egui::{Color32, RichText, Stroke, Ui};

use crate::ui::route::Route;
use crate::ui::theme::Theme;

/// Render the header content. Returns a route when the user navigates.
pub fn render(ui: &mut Ui, current: Route) -> Option<Route> {
    let mut next = None;

    ui.horizontal(|ui| {
        // App title doubles as a home link
        let title = egui::Button::new(
            RichText::new("Movie API")
                .size(18.0)
                .strong()
                .color(Color32::WHITE),
        )
        .frame(false);
        if ui.add(title).clicked() {
            next = Some(Route::Home);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Laid out right to left, so the last link comes first
            if nav_button(ui, Route::Search, current) {
                next = Some(Route::Search);
            }
            if nav_button(ui, Route::Home, current) {
                next = Some(Route::Home);
            }
        });
    });

    next
}

/// Flat navigation button, highlighted when its route is active
fn nav_button(ui: &mut Ui, target: Route, current: Route) -> bool {
    let active = current == target;
    let text = RichText::new(target.label()).color(Color32::WHITE);
    let text = if active { text.strong() } else { text };

    let fill = if active {
        Theme::PRIMARY_DARK
    } else {
        Color32::TRANSPARENT
    };

    ui.add(egui::Button::new(text).fill(fill).stroke(Stroke::NONE))
        .clicked()
}
