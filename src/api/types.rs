//! Wire types and errors for the backend API

use serde::Deserialize;
use thiserror::Error;

/// Response from `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    /// Health status, `"ok"` when the backend is up
    pub status: String,
    /// Human-readable status message
    pub message: String,
    /// Backend version string
    pub version: String,
}

impl HealthResponse {
    /// Whether the backend reported itself healthy
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Errors returned by the API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not the expected JSON
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),

    /// The request URL could not be constructed
    #[error("invalid request URL")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Whether retrying the same request could plausibly succeed.
    ///
    /// Client errors are final, with the exception of 429 which signals
    /// a temporary limit. Transport failures and server errors are
    /// worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => {
                status.is_server_error() || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
            }
            ApiError::Decode(_) | ApiError::InvalidUrl(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_decodes_backend_payload() {
        let raw = r#"{"status":"ok","message":"Movie API is running","version":"1.0.0"}"#;

        let health: HealthResponse = serde_json::from_str(raw).unwrap();

        assert!(health.is_ok());
        assert_eq!(health.message, "Movie API is running");
        assert_eq!(health.version, "1.0.0");
    }

    #[test]
    fn degraded_status_is_not_ok() {
        let raw = r#"{"status":"degraded","message":"database unavailable","version":"1.0.0"}"#;

        let health: HealthResponse = serde_json::from_str(raw).unwrap();

        assert!(!health.is_ok());
    }

    #[test]
    fn server_errors_and_rate_limits_are_retryable() {
        let server_error = ApiError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        };
        let rate_limited = ApiError::Status {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: String::new(),
        };

        assert!(server_error.is_retryable());
        assert!(rate_limited.is_retryable());
    }

    #[test]
    fn client_and_decode_errors_are_final() {
        let not_found = ApiError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            body: String::new(),
        };
        let decode =
            ApiError::Decode(serde_json::from_str::<HealthResponse>("not json").unwrap_err());

        assert!(!not_found.is_retryable());
        assert!(!decode.is_retryable());
    }
}
