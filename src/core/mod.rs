//! Core application logic

mod app_state;
pub mod config;

pub use app_state::{AppState, Screen, StoreState};
pub use config::Config;
