//! User interface modules

mod app;
mod boundary;
pub mod components;
pub mod pages;
mod route;
pub mod theme;

pub use app::MovieApiApp;
pub use route::Route;
