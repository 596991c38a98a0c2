//! Google Maps error types

use reqwest::{Response, StatusCode};
use thiserror::Error;

use crate::models::GoogleErrorResponse;

/// Errors that can occur while talking to the Google Maps Platform
#[derive(Debug, Error)]
pub enum GoogleMapsError {
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
    #[error("Request denied: {0}")]
    Unauthorized(String),

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The geocoder answered with a non-`OK` status
    #[error(
        "Geocoding failed: {status}{}",
        message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default()
    )]
    Geocoding {
        /// Provider status, e.g. `ZERO_RESULTS` or `REQUEST_DENIED`
        status: String,
        /// Provider `error_message`, when given
        message: Option<String>,
    },

    /// The geocoder answered `OK` without any result
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// The routes service returned no route
    #[error("No routes found")]
    NoRoutesFound,

    /// Coordinates returned by the service are out of range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl GoogleMapsError {
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

    /// Map a transport error, dropping the URL so the API key never leaks
    pub(crate) fn from_transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout { timeout_secs }
        } else {
            Self::ConnectionFailed(err.without_url().to_string())
        }
    }

    /// Map a non-success HTTP response, using the Google error body when present
    pub(crate) async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GoogleErrorResponse>(&body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| format!("HTTP {status}"));

        match status {
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimitExceeded,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(message),
            _ => Self::RequestFailed(message),
        }
    }
}
