//! Emission adapter - Implements EmissionPort using integration_climatiq

use application::error::ApplicationError;
use application::ports::EmissionPort;
use async_trait::async_trait;
use domain::value_objects::{Co2Mass, Distance};
use integration_climatiq::{ClimatiqClient, ClimatiqConfig, ClimatiqError, EmissionClient};
use tracing::{debug, instrument};

/// Adapter estimating trip emissions with Climatiq
pub struct EmissionAdapter {
    client: ClimatiqClient,
}

impl std::fmt::Debug for EmissionAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmissionAdapter")
            .field("client", &"ClimatiqClient")
            .finish()
    }
}

impl EmissionAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &ClimatiqConfig) -> Result<Self, ApplicationError> {
        let client = ClimatiqClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration emission error to application error
    fn map_error(err: ClimatiqError) -> ApplicationError {
        match err {
            ClimatiqError::ConnectionFailed(_) | ClimatiqError::Timeout { .. } => {
                ApplicationError::Network(err.to_string())
            },
            ClimatiqError::RateLimitExceeded => ApplicationError::RateLimited,
            ClimatiqError::ConfigurationError(e) => ApplicationError::Configuration(e),
            ClimatiqError::InvalidDistance(_) => ApplicationError::Internal(err.to_string()),
            ClimatiqError::RequestFailed(_)
            | ClimatiqError::Unauthorized(_)
            | ClimatiqError::ParseError(_) => ApplicationError::ExternalService(err.to_string()),
        }
    }
}

#[async_trait]
impl EmissionPort for EmissionAdapter {
    #[instrument(skip(self), fields(km = distance.kilometers()))]
    async fn estimate_co2(&self, distance: Distance) -> Result<Co2Mass, ApplicationError> {
        let kilograms = self
            .client
            .estimate_co2(distance.kilometers())
            .await
            .map_err(Self::map_error)?;

        debug!(kilograms, "Estimated emissions");
        Ok(Co2Mass::from_kilograms(kilograms)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            EmissionAdapter::map_error(ClimatiqError::ConnectionFailed("refused".into())),
            ApplicationError::Network(_)
        ));
        assert!(matches!(
            EmissionAdapter::map_error(ClimatiqError::RateLimitExceeded),
            ApplicationError::RateLimited
        ));
        assert!(matches!(
            EmissionAdapter::map_error(ClimatiqError::Unauthorized("bad key".into())),
            ApplicationError::ExternalService(_)
        ));
    }

    #[test]
    fn test_new_requires_api_key() {
        let err = EmissionAdapter::new(&ClimatiqConfig::default()).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(ref m) if m.contains("api_key")));
    }
}
