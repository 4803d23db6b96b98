//! Backend API client

mod client;
mod types;

pub use client::{ApiClient, ApiClientBuilder};
pub use types::{ApiError, HealthResponse};
