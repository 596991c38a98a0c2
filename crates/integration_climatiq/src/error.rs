//! Climatiq error types

use reqwest::{Response, StatusCode};
use thiserror::Error;

use crate::models::ClimatiqErrorResponse;

/// Errors that can occur during emission estimates
#[derive(Debug, Error)]
pub enum ClimatiqError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The service answered with an unexpected HTTP status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The API key was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Distance is negative or not a finite number
    #[error("Invalid distance: {0}")]
    InvalidDistance(f64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl ClimatiqError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::Timeout { .. }
                | Self::RequestFailed(_)
                | Self::RateLimitExceeded
        )
    }

    /// Returns true for transport-level failures (no HTTP response)
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout { .. })
    }

    pub(crate) fn from_transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(err.without_url().to_string())
        }
    }

    pub(crate) async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ClimatiqErrorResponse>(&body)
            .ok()
            .and_then(ClimatiqErrorResponse::into_message)
            .unwrap_or_else(|| format!("HTTP {status}"));

        match status {
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimitExceeded,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(message),
            _ => Self::RequestFailed(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(ClimatiqError::Timeout { timeout_secs: 5 }.is_retryable());
        assert!(ClimatiqError::RateLimitExceeded.is_retryable());
        assert!(!ClimatiqError::Unauthorized("bad key".to_string()).is_retryable());
        assert!(!ClimatiqError::InvalidDistance(-1.0).is_retryable());
    }

    #[test]
    fn test_network_errors() {
        assert!(ClimatiqError::ConnectionFailed("refused".to_string()).is_network());
        assert!(!ClimatiqError::RequestFailed("HTTP 500".to_string()).is_network());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClimatiqError::InvalidDistance(-3.5).to_string(),
            "Invalid distance: -3.5"
        );
        assert_eq!(
            ClimatiqError::Timeout { timeout_secs: 30 }.to_string(),
            "Request timed out after 30 seconds"
        );
    }
}
