//! HTTP client for the Movie API backend
//!
//! Only the health endpoint is wired up today; `get_json` is the shared
//! request path future endpoints will go through.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::api::types::{ApiError, HealthResponse};

/// Maximum number of retries after the initial request fails
const MAX_RETRIES: u32 = 3;

/// Pause between retry attempts
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Client for the Movie API backend
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    retry_backoff: Duration,
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    request_timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry_backoff: Option<Duration>,
}

impl ApiClientBuilder {
    /// Base URL of the backend (required)
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// User-Agent header sent with every request (required)
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Total per-request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Pause between retry attempts, mainly shortened by tests
    pub fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = Some(backoff);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient> {
        let base_url = self.base_url.context("base_url is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let mut builder = Client::builder().user_agent(user_agent).gzip(true);
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(ApiClient {
            http,
            base_url,
            retry_backoff: self.retry_backoff.unwrap_or(RETRY_BACKOFF),
        })
    }
}

impl ApiClient {
    /// Start building a client
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Fetch backend health
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get_json("api/health").await
    }

    /// GET a JSON document at a path relative to the base URL, retrying
    /// transient failures up to [`MAX_RETRIES`] times.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.base_url.join(path)?;

        let mut attempt: u32 = 0;
        loop {
            match self.try_get_json(&url).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < MAX_RETRIES => {
                    attempt += 1;
                    warn!(
                        url = %url,
                        attempt,
                        max_retries = MAX_RETRIES,
                        "Request failed, retrying: {e}"
                    );
                    tokio::time::sleep(self.retry_backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Perform a single GET and decode the JSON body
    async fn try_get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ApiError> {
        debug!(url = %url, "GET");
        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(ApiError::Status { status, body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}
