//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Every failure aborts the current run; only the binary decides how the
/// process terminates.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A place name could not be resolved to coordinates
    #[error("Could not geocode '{place}': {reason}")]
    Geocoding {
        /// The place name as entered
        place: String,
        /// Provider-facing reason, e.g. "Geocoding failed: ZERO_RESULTS"
        reason: String,
    },

    /// Transport-level failure talking to an external service
    #[error("Network error: {0}")]
    Network(String),

    /// The routing service returned no route
    #[error("No driving route found from {from} to {to}")]
    RouteNotFound {
        /// Origin description
        from: String,
        /// Destination description
        to: String,
    },

    /// External service error (HTTP failure, rejected credentials, bad body)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Reading or writing the history log failed
    #[error("History log error: {0}")]
    Persistence(String),

    /// Rendering the chart failed
    #[error("Chart rendering failed: {0}")]
    Rendering(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited | Self::Network(_) | Self::ExternalService(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoding_error_keeps_provider_status() {
        let err = ApplicationError::Geocoding {
            place: "InvalidAddress123XYZ".to_string(),
            reason: "Geocoding failed: ZERO_RESULTS".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Geocoding failed"));
        assert!(msg.contains("ZERO_RESULTS"));
        assert!(msg.contains("InvalidAddress123XYZ"));
    }

    #[test]
    fn route_not_found_names_both_ends() {
        let err = ApplicationError::RouteNotFound {
            from: "Honolulu".to_string(),
            to: "Tokyo".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No driving route found from Honolulu to Tokyo"
        );
    }

    #[test]
    fn domain_errors_convert() {
        let err: ApplicationError = DomainError::validation("bad").into();
        assert!(matches!(err, ApplicationError::Domain(_)));
        assert_eq!(err.to_string(), "Validation failed: bad");
    }

    #[test]
    fn retryable_errors() {
        assert!(ApplicationError::RateLimited.is_retryable());
        assert!(ApplicationError::Network("reset".into()).is_retryable());
        assert!(ApplicationError::ExternalService("502".into()).is_retryable());
    }

    #[test]
    fn non_retryable_errors() {
        assert!(!ApplicationError::Persistence("disk full".into()).is_retryable());
        assert!(!ApplicationError::Configuration("missing key".into()).is_retryable());
        assert!(
            !ApplicationError::RouteNotFound {
                from: "A".into(),
                to: "B".into()
            }
            .is_retryable()
        );
    }
}
