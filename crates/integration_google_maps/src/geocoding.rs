//! Google Geocoding client
//!
//! Converts free-form address strings to coordinates using the
//! Geocoding API's JSON endpoint.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::{debug, error, instrument, warn};

use crate::config::GoogleMapsConfig;
use crate::error::GoogleMapsError;
use crate::models::GeocodeResponse;

/// Status the Geocoding API reports for a successful lookup
const STATUS_OK: &str = "OK";

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to the coordinates of the first match
    async fn geocode(&self, address: &str) -> Result<GeoLocation, GoogleMapsError>;
}

/// Google Geocoding API client
pub struct GoogleGeocodingClient {
    client: Client,
    config: GoogleMapsConfig,
}

impl std::fmt::Debug for GoogleGeocodingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleGeocodingClient")
            .field("base_url", &self.config.geocoding_base_url)
            .finish_non_exhaustive()
    }
}

impl GoogleGeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &GoogleMapsConfig) -> Result<Self, GoogleMapsError> {
        config
            .validate()
            .map_err(GoogleMapsError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("carbon-tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GoogleMapsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/maps/api/geocode/json",
            self.config.geocoding_base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl GeocodingClient for GoogleGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeoLocation, GoogleMapsError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GoogleMapsError::AddressNotFound(
                "Address must not be empty".to_string(),
            ));
        }

        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("address", address),
                ("key", self.config.api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| {
                let err = GoogleMapsError::from_transport(e, self.config.timeout_secs);
                error!(error = %err, "Network error in geocoding");
                err
            })?;

        if !response.status().is_success() {
            return Err(GoogleMapsError::from_response(response).await);
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GoogleMapsError::ParseError(e.without_url().to_string()))?;

        if body.status != STATUS_OK {
            warn!(
                status = %body.status,
                message = body.error_message.as_deref().unwrap_or_default(),
                "Geocoding rejected"
            );
            return Err(GoogleMapsError::Geocoding {
                status: body.status,
                message: body.error_message,
            });
        }

        let location = body
            .results
            .into_iter()
            .next()
            .map(|r| r.geometry.location)
            .ok_or_else(|| GoogleMapsError::AddressNotFound(address.to_string()))?;

        debug!(%address, lat = location.lat, lng = location.lng, "Geocoded address");

        GeoLocation::new(location.lat, location.lng)
            .map_err(|e| GoogleMapsError::InvalidCoordinates(e.to_string()))
    }
}
