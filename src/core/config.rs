//! Application configuration parsed from environment variables

use std::time::Duration;

use anyhow::{bail, Context, Result};
use url::Url;

/// Default backend base URL (the local development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default total per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// User-Agent sent with every backend request.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Runtime configuration for the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Movie API backend
    pub api_base_url: Url,
    /// Total per-request timeout
    pub request_timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// User-Agent for backend requests
    pub user_agent: String,
}

impl Config {
    /// Build the configuration from environment variables.
    ///
    /// Optional:
    /// - `MOVIEAPI_BASE_URL`: backend base URL, default `http://localhost:8080`
    /// - `MOVIEAPI_REQUEST_TIMEOUT_SECS`: default 30
    /// - `MOVIEAPI_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_url = get("MOVIEAPI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut api_base_url = Url::parse(&raw_url)
            .with_context(|| format!("invalid MOVIEAPI_BASE_URL: {raw_url}"))?;

        // Request paths are joined onto the base URL; without a trailing
        // slash, Url::join would replace the last path segment.
        if !api_base_url.path().ends_with('/') {
            let path = format!("{}/", api_base_url.path());
            api_base_url.set_path(&path);
        }

        let config = Self {
            api_base_url,
            request_timeout: Duration::from_secs(parse_u64(
                get("MOVIEAPI_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            connect_timeout: Duration::from_secs(parse_u64(
                get("MOVIEAPI_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        match self.api_base_url.scheme() {
            "http" | "https" => {}
            other => bail!("unsupported base URL scheme: {other} (expected http or https)"),
        }

        if self.request_timeout.is_zero() {
            bail!("request timeout must be greater than zero");
        }

        Ok(())
    }
}

/// Parse an optional variable as u64, falling back to the default when the
/// variable is absent or not a number.
fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        // Arrange & Act
        let config = Config::from_lookup(lookup(&[])).unwrap();

        // Assert
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8080/");
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(
            config.connect_timeout,
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)
        );
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn base_url_override_is_used() {
        // Arrange
        let vars = [("MOVIEAPI_BASE_URL", "https://movies.example.com")];

        // Act
        let config = Config::from_lookup(lookup(&vars)).unwrap();

        // Assert
        assert_eq!(config.api_base_url.as_str(), "https://movies.example.com/");
    }

    #[test]
    fn base_url_path_gets_trailing_slash() {
        // Arrange
        let vars = [("MOVIEAPI_BASE_URL", "http://localhost:9000/movieapi")];

        // Act
        let config = Config::from_lookup(lookup(&vars)).unwrap();

        // Assert: joining a request path must keep the prefix
        assert_eq!(
            config.api_base_url.join("api/health").unwrap().as_str(),
            "http://localhost:9000/movieapi/api/health"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        // Arrange
        let vars = [("MOVIEAPI_BASE_URL", "not a url")];

        // Act
        let result = Config::from_lookup(lookup(&vars));

        // Assert
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid MOVIEAPI_BASE_URL"));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        // Arrange
        let vars = [("MOVIEAPI_BASE_URL", "ftp://movies.example.com")];

        // Act
        let result = Config::from_lookup(lookup(&vars));

        // Assert
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unsupported base URL scheme"));
    }

    #[test]
    fn timeout_overrides_are_parsed() {
        // Arrange
        let vars = [
            ("MOVIEAPI_REQUEST_TIMEOUT_SECS", "5"),
            ("MOVIEAPI_CONNECT_TIMEOUT_SECS", "2"),
        ];

        // Act
        let config = Config::from_lookup(lookup(&vars)).unwrap();

        // Assert
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
    }

    #[test]
    fn malformed_timeout_falls_back_to_default() {
        // Arrange
        let vars = [("MOVIEAPI_REQUEST_TIMEOUT_SECS", "soon")];

        // Act
        let config = Config::from_lookup(lookup(&vars)).unwrap();

        // Assert
        assert_eq!(
            config.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn zero_request_timeout_is_rejected() {
        // Arrange
        let vars = [("MOVIEAPI_REQUEST_TIMEOUT_SECS", "0")];

        // Act
        let result = Config::from_lookup(lookup(&vars));

        // Assert
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("request timeout must be greater than zero"));
    }
}
