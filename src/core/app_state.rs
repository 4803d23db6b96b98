//! Global application state shared between the UI and background tasks

use std::sync::{Arc, RwLock};

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::core::Config;

/// Global UI store.
///
/// Application-level flags the root of the UI renders from. Nothing
/// mutates these yet; pages and the chrome only ever read them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreState {
    /// Whether a blocking app-level operation is in flight
    pub is_loading: bool,
    /// Application-level error message, if any
    pub error: Option<String>,
}

/// What the root of the UI should render this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Full-screen spinner, no chrome
    Loading,
    /// Full-screen error message, no chrome
    Errored(String),
    /// Normal chrome and routed page
    Ready,
}

impl StoreState {
    /// Resolve the store flags into a screen. Loading takes precedence over
    /// an error, an error takes precedence over the routed content.
    pub fn screen(&self) -> Screen {
        if self.is_loading {
            Screen::Loading
        } else if let Some(message) = &self.error {
            Screen::Errored(message.clone())
        } else {
            Screen::Ready
        }
    }
}

/// Central application state
pub struct AppState {
    /// Runtime configuration
    pub config: Arc<Config>,
    /// Global UI store
    pub store: Arc<RwLock<StoreState>>,
    /// Backend API client
    pub api: Arc<ApiClient>,
    /// Async runtime for background requests
    runtime: Arc<Runtime>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;

        let api = ApiClient::builder()
            .base_url(config.api_base_url.clone())
            .user_agent(&config.user_agent)
            .request_timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .context("Failed to build API client")?;

        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(StoreState::default())),
            api: Arc::new(api),
            runtime: Arc::new(runtime),
        })
    }

    /// Check backend health in the background. The result is only logged;
    /// the UI never waits on it.
    pub fn spawn_health_check(&self) {
        let api = Arc::clone(&self.api);
        self.runtime.spawn(async move {
            match api.health().await {
                Ok(health) => {
                    info!(
                        status = %health.status,
                        version = %health.version,
                        "Backend API connected: {}",
                        health.message
                    );
                }
                Err(e) => {
                    warn!("Backend API connection failed: {e:#}");
                }
            }
        });
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            store: Arc::clone(&self.store),
            api: Arc::clone(&self.api),
            runtime: Arc::clone(&self.runtime),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_defaults_to_idle() {
        let store = StoreState::default();

        assert!(!store.is_loading);
        assert!(store.error.is_none());
        assert_eq!(store.screen(), Screen::Ready);
    }

    #[test]
    fn loading_takes_precedence_over_error() {
        let store = StoreState {
            is_loading: true,
            error: Some("backend unreachable".to_string()),
        };

        assert_eq!(store.screen(), Screen::Loading);
    }

    #[test]
    fn error_takes_precedence_over_ready() {
        let store = StoreState {
            is_loading: false,
            error: Some("backend unreachable".to_string()),
        };

        assert_eq!(
            store.screen(),
            Screen::Errored("backend unreachable".to_string())
        );
    }

    #[test]
    fn app_state_builds_from_default_config() {
        let config = Config::from_env().unwrap();

        let state = AppState::new(config).unwrap();

        assert_eq!(state.store.read().unwrap().screen(), Screen::Ready);
    }
}
