//! Geocoding adapter - Implements GeocodingPort using integration_google_maps

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::value_objects::{GeoLocation, PlaceName};
use integration_google_maps::{
    GeocodingClient, GoogleGeocodingClient, GoogleMapsConfig, GoogleMapsError,
};
use tracing::{debug, instrument};

/// Adapter resolving place names with the Google Geocoding API
pub struct GeocodingAdapter {
    client: GoogleGeocodingClient,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"GoogleGeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &GoogleMapsConfig) -> Result<Self, ApplicationError> {
        let client = GoogleGeocodingClient::new(config).map_err(|e| match e {
            GoogleMapsError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::Internal(other.to_string()),
        })?;
        Ok(Self { client })
    }

    /// Map integration geocoding error to application error
    fn map_error(place: &str, err: GoogleMapsError) -> ApplicationError {
        match err {
            GoogleMapsError::Geocoding { .. } => ApplicationError::Geocoding {
                place: place.to_string(),
                reason: err.to_string(),
            },
            GoogleMapsError::AddressNotFound(_) => ApplicationError::Geocoding {
                place: place.to_string(),
                reason: "Geocoding failed: no results".to_string(),
            },
            GoogleMapsError::ConnectionFailed(_) | GoogleMapsError::Timeout { .. } => {
                ApplicationError::Network(err.to_string())
            },
            GoogleMapsError::RateLimitExceeded => ApplicationError::RateLimited,
            GoogleMapsError::ConfigurationError(e) => ApplicationError::Configuration(e),
            GoogleMapsError::RequestFailed(_)
            | GoogleMapsError::Unauthorized(_)
            | GoogleMapsError::ParseError(_)
            | GoogleMapsError::InvalidCoordinates(_)
            | GoogleMapsError::NoRoutesFound => ApplicationError::ExternalService(err.to_string()),
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self), fields(place = %place))]
    async fn geocode(&self, place: &PlaceName) -> Result<GeoLocation, ApplicationError> {
        let location = self
            .client
            .geocode(place.as_str())
            .await
            .map_err(|e| Self::map_error(place.as_str(), e))?;

        debug!(%location, "Geocoded place");
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_results_maps_to_geocoding_error() {
        let err = GeocodingAdapter::map_error(
            "Nowhere",
            GoogleMapsError::Geocoding {
                status: "ZERO_RESULTS".to_string(),
                message: None,
            },
        );
        let text = err.to_string();
        assert!(text.contains("Nowhere"));
        assert!(text.contains("Geocoding failed: ZERO_RESULTS"));
    }

    #[test]
    fn test_provider_message_is_kept() {
        let err = GeocodingAdapter::map_error(
            "Paris",
            GoogleMapsError::Geocoding {
                status: "REQUEST_DENIED".to_string(),
                message: Some("The provided API key is invalid.".to_string()),
            },
        );
        assert!(err.to_string().contains("The provided API key is invalid."));
    }

    #[test]
    fn test_network_and_service_errors() {
        assert!(matches!(
            GeocodingAdapter::map_error("x", GoogleMapsError::Timeout { timeout_secs: 5 }),
            ApplicationError::Network(_)
        ));
        assert!(matches!(
            GeocodingAdapter::map_error("x", GoogleMapsError::RateLimitExceeded),
            ApplicationError::RateLimited
        ));
        assert!(matches!(
            GeocodingAdapter::map_error("x", GoogleMapsError::Unauthorized("denied".into())),
            ApplicationError::ExternalService(_)
        ));
    }

    #[test]
    fn test_new_requires_api_key() {
        let err = GeocodingAdapter::new(&GoogleMapsConfig::default()).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}
