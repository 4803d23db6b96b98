//! Movie API - Desktop client for the Movie API backend
//!
//! A native front-end for browsing movies and TV shows powered by TMDb.
//! Currently a routed shell: every page renders placeholder content while
//! the backend integration is limited to a startup health check.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(dead_code)] // Theme palette and API surface are broader than the placeholder pages use

mod api;
mod core;
mod ui;

use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::{AppState, Config};
use crate::ui::{MovieApiApp, Route};

/// Application name constant
pub const APP_NAME: &str = "Movie API";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let started = Instant::now();

    // Initialize logging
    init_logging();

    info!("{} v{} starting...", APP_NAME, APP_VERSION);

    // Load configuration from the environment
    let config = Config::from_env()?;
    let mode = if cfg!(debug_assertions) {
        "development"
    } else {
        "production"
    };
    info!(mode, api_url = %config.api_base_url, version = APP_VERSION, "Environment");

    // Optional path argument selects the initial route, e.g.
    // `movieapi-desktop /movie/603`. Unknown paths land on the 404 page.
    let initial_route = match std::env::args().nth(1) {
        Some(path) => {
            let route = Route::parse(&path);
            info!("Opening at {} ({})", route.label(), path);
            route
        }
        None => Route::Home,
    };

    // Create application state
    let state = AppState::new(config)?;
    info!("Application state initialized");

    // Fire-and-forget backend health check; the result is only logged
    state.spawn_health_check();

    // Run the GUI application
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_icon(load_app_icon()),
        ..Default::default()
    };

    info!("Starting GUI...");
    eframe::run_native(
        &format!("{} v{}", APP_NAME, APP_VERSION),
        native_options,
        Box::new(move |cc| Ok(Box::new(MovieApiApp::new(cc, state, initial_route, started)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    info!("{} shutting down", APP_NAME);
    Ok(())
}

/// Initialize the logging system
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("movieapi_desktop=info,eframe=warn,egui=warn,wgpu=error")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load the application icon
fn load_app_icon() -> egui::IconData {
    // Default icon - blue disc in the primary palette color
    // In production, this would load from an embedded resource
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let cx = x as f32 - size as f32 / 2.0;
            let cy = y as f32 - size as f32 / 2.0;
            let dist = (cx * cx + cy * cy).sqrt();

            if dist < size as f32 / 2.0 - 2.0 {
                // Gradient toward the MUI blue used by the theme
                let t = dist / (size as f32 / 2.0);
                rgba[idx] = (25.0 + t * 25.0) as u8; // R
                rgba[idx + 1] = (118.0 - t * 28.0) as u8; // G
                rgba[idx + 2] = (210.0 - t * 40.0) as u8; // B
                rgba[idx + 3] = 255; // A
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
