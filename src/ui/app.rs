//! Main application UI

use std::time::Instant;

use egui::{CentralPanel, Color32, Context, RichText, TopBottomPanel};
use tracing::info;

use super::boundary::ErrorBoundary;
use super::components;
use super::pages;
use super::route::Route;
use super::theme::Theme;
use crate::core::{AppState, Screen};

/// Main application struct
pub struct MovieApiApp {
    /// Application state
    state: AppState,
    /// Current page
    route: Route,
    /// Panic guard around the page tree
    boundary: ErrorBoundary,
    /// Process start time, for the first-frame log
    started: Instant,
    /// First frame flag
    first_frame: bool,
}

impl MovieApiApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        state: AppState,
        initial_route: Route,
        started: Instant,
    ) -> Self {
        Theme::apply(&cc.egui_ctx);

        Self {
            state,
            route: initial_route,
            boundary: ErrorBoundary::default(),
            started,
            first_frame: true,
        }
    }

    /// Switch to another page
    fn navigate(&mut self, route: Route) {
        if route != self.route {
            info!("Navigating to {}", route.label());
            self.route = route;
        }
    }

    /// Render the header bar
    fn render_header(&mut self, ctx: &Context) {
        let mut next = None;

        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(Theme::PRIMARY)
                    .inner_margin(egui::Margin::symmetric(16.0, 8.0)),
            )
            .show(ctx, |ui| {
                next = components::header::render(ui, self.route);
            });

        if let Some(route) = next {
            self.navigate(route);
        }
    }

    /// Render the footer bar
    fn render_footer(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::none()
                    .fill(Theme::BG_SUBTLE)
                    .stroke(egui::Stroke::new(0.5, Theme::BORDER))
                    .inner_margin(egui::Margin::symmetric(16.0, 8.0)),
            )
            .show(ctx, |ui| {
                components::footer::render(ui);
            });
    }

    /// Render the routed page in the main content area
    fn render_page(&mut self, ctx: &Context) {
        let mut next = None;

        CentralPanel::default().show(ctx, |ui| {
            egui::Frame::none()
                .inner_margin(egui::Margin::symmetric(24.0, 16.0))
                .show(ui, |ui| match self.route {
                    Route::Home => pages::home::render(ui),
                    Route::Search => pages::search::render(ui),
                    Route::MovieDetails(_) => pages::movie_details::render(ui),
                    Route::TvDetails(_) => pages::tv_details::render(ui),
                    Route::NotFound => next = pages::not_found::render(ui),
                });
        });

        if let Some(route) = next {
            self.navigate(route);
        }
    }

    /// Full-screen spinner shown while the store reports loading
    fn render_loading_screen(&self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui.available_height() * 0.4);
            ui.vertical_centered(|ui| {
                ui.add(egui::Spinner::new().size(60.0).color(Theme::PRIMARY));
                ui.add_space(16.0);
                ui.label(
                    RichText::new("Loading Movie API...")
                        .size(18.0)
                        .color(Theme::TEXT_SECONDARY),
                );
            });
        });
    }

    /// Full-screen message shown while the store reports an error
    fn render_error_screen(&self, ctx: &Context, message: &str) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Something went wrong")
                        .size(24.0)
                        .strong()
                        .color(Theme::ERROR),
                );
                ui.add_space(12.0);
                ui.label(RichText::new(message).color(Theme::TEXT_SECONDARY));
            });
        });
    }

    /// Fallback shown after a page panic, with a way back
    fn render_crash_screen(&mut self, ctx: &Context, message: &str) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Something went wrong")
                        .size(24.0)
                        .strong()
                        .color(Theme::ERROR),
                );
                ui.add_space(12.0);
                ui.label(RichText::new(message).color(Theme::TEXT_SECONDARY));
                ui.add_space(24.0);

                let reload = egui::Button::new(RichText::new("Reload Page").color(Color32::WHITE))
                    .fill(Theme::PRIMARY)
                    .min_size(egui::vec2(130.0, 36.0));
                if ui.add(reload).clicked() {
                    self.boundary.reset();
                    self.route = Route::Home;
                    info!("UI reloaded after render panic");
                }
            });
        });
    }

    /// Small fixed badge shown in debug builds
    fn render_dev_badge(&self, ctx: &Context) {
        if !cfg!(debug_assertions) {
            return;
        }

        egui::Area::new(egui::Id::new("dev_badge"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-10.0, -10.0))
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(Color32::from_black_alpha(26))
                    .rounding(egui::Rounding::same(4.0))
                    .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("Dev Mode")
                                .small()
                                .color(Color32::from_rgb(102, 102, 102)),
                        );
                    });
            });
    }
}

impl eframe::App for MovieApiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // First frame setup
        if self.first_frame {
            self.first_frame = false;
            let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
            info!("Movie API loaded in {elapsed_ms:.2}ms");
        }

        // App-level store flags preempt the routed content
        let screen = self.state.store.read().unwrap().screen();
        match screen {
            Screen::Loading => {
                self.render_loading_screen(ctx);
                return;
            }
            Screen::Errored(message) => {
                self.render_error_screen(ctx, &message);
                return;
            }
            Screen::Ready => {}
        }

        // A captured panic replaces the page tree until the user reloads
        if let Some(message) = self.boundary.caught().map(str::to_owned) {
            self.render_crash_screen(ctx, &message);
            self.render_dev_badge(ctx);
            return;
        }

        // Header, footer, then the routed page; the central panel must
        // come last so it takes the remaining space
        let mut boundary = std::mem::take(&mut self.boundary);
        boundary.run(|| {
            self.render_header(ctx);
            self.render_footer(ctx);
            self.render_page(ctx);
        });
        self.boundary = boundary;

        self.render_dev_badge(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
    }
}
