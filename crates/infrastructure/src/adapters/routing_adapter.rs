//! Routing adapter - Implements RoutingPort using integration_google_maps

use application::error::ApplicationError;
use application::ports::RoutingPort;
use async_trait::async_trait;
use domain::value_objects::{Distance, GeoLocation};
use integration_google_maps::{
    GoogleMapsConfig, GoogleMapsError, GoogleRoutesClient, RoutesClient,
};
use tracing::{debug, instrument};

/// Adapter computing driving distances with the Google Routes API
pub struct RoutingAdapter {
    client: GoogleRoutesClient,
}

impl std::fmt::Debug for RoutingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingAdapter")
            .field("client", &"GoogleRoutesClient")
            .finish()
    }
}

impl RoutingAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &GoogleMapsConfig) -> Result<Self, ApplicationError> {
        let client = GoogleRoutesClient::new(config).map_err(|e| match e {
            GoogleMapsError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::Internal(other.to_string()),
        })?;
        Ok(Self { client })
    }

    /// Map integration routing error to application error
    fn map_error(
        err: GoogleMapsError,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> ApplicationError {
        match err {
            GoogleMapsError::NoRoutesFound => ApplicationError::RouteNotFound {
                from: origin.to_string(),
                to: destination.to_string(),
            },
            GoogleMapsError::ConnectionFailed(_) | GoogleMapsError::Timeout { .. } => {
                ApplicationError::Network(err.to_string())
            },
            GoogleMapsError::RateLimitExceeded => ApplicationError::RateLimited,
            GoogleMapsError::ConfigurationError(e) => ApplicationError::Configuration(e),
            GoogleMapsError::RequestFailed(_)
            | GoogleMapsError::Unauthorized(_)
            | GoogleMapsError::ParseError(_)
            | GoogleMapsError::Geocoding { .. }
            | GoogleMapsError::AddressNotFound(_)
            | GoogleMapsError::InvalidCoordinates(_) => {
                ApplicationError::ExternalService(err.to_string())
            },
        }
    }
}

#[async_trait]
impl RoutingPort for RoutingAdapter {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn route_distance(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<Distance, ApplicationError> {
        let meters = self
            .client
            .route_distance(origin, destination)
            .await
            .map_err(|e| Self::map_error(e, origin, destination))?;

        debug!(meters, "Computed route distance");

        #[allow(clippy::cast_precision_loss)] // Route lengths are far below 2^52 meters
        let distance = Distance::from_meters(meters as f64)?;
        Ok(distance)
    }
}
