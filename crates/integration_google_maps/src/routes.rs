//! Google Routes client
//!
//! Computes driving routes with the Routes API `computeRoutes` method.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::{debug, error, instrument, warn};

use crate::config::GoogleMapsConfig;
use crate::error::GoogleMapsError;
use crate::models::{
    ComputeRoutesRequest, ComputeRoutesResponse, Route, RouteModifiers, RoutingPreference,
    TravelMode, Units, Waypoint,
};

/// Response field mask: only the fields the client reads
pub const ROUTES_FIELD_MASK: &str = "routes.distanceMeters,routes.duration";

/// Trait for driving route clients
#[async_trait]
pub trait RoutesClient: Send + Sync {
    /// Compute the preferred driving route between two coordinates
    async fn compute_route(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<Route, GoogleMapsError>;

    /// Driving distance in meters of the preferred route
    async fn route_distance(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<u64, GoogleMapsError> {
        Ok(self.compute_route(origin, destination).await?.distance_meters)
    }
}

/// Google Routes API client
pub struct GoogleRoutesClient {
    client: Client,
    config: GoogleMapsConfig,
}

impl std::fmt::Debug for GoogleRoutesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleRoutesClient")
            .field("base_url", &self.config.routes_base_url)
            .finish_non_exhaustive()
    }
}

impl GoogleRoutesClient {
    /// Create a new routes client
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
            "{}/directions/v2:computeRoutes",
            self.config.routes_base_url.trim_end_matches('/')
        )
    }

    /// Driving request with traffic-aware routing, no alternatives and no avoidances
    fn build_request(origin: &GeoLocation, destination: &GeoLocation) -> ComputeRoutesRequest {
        ComputeRoutesRequest {
            origin: Waypoint::at(origin.latitude(), origin.longitude()),
            destination: Waypoint::at(destination.latitude(), destination.longitude()),
            travel_mode: TravelMode::Drive,
            routing_preference: RoutingPreference::TrafficAware,
            compute_alternative_routes: false,
            route_modifiers: RouteModifiers::default(),
            units: Units::Metric,
        }
    }
}

#[async_trait]
impl RoutesClient for GoogleRoutesClient {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn compute_route(
        &self,
        origin: &GeoLocation,
        destination: &GeoLocation,
    ) -> Result<Route, GoogleMapsError> {
        let request = Self::build_request(origin, destination);

        debug!("Computing driving route");

        let response = self
            .client
            .post(self.endpoint())
            .header("X-Goog-Api-Key", self.config.api_key.expose_secret())
            .header("X-Goog-FieldMask", ROUTES_FIELD_MASK)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let err = GoogleMapsError::from_transport(e, self.config.timeout_secs);
                error!(error = %err, "Network error in distance calculation");
                err
            })?;

        if !response.status().is_success() {
            return Err(GoogleMapsError::from_response(response).await);
        }

        let body: ComputeRoutesResponse = response
            .json()
            .await
            .map_err(|e| GoogleMapsError::ParseError(e.without_url().to_string()))?;

        let Some(route) = body.routes.into_iter().next() else {
            warn!("Routes API returned no routes");
            return Err(GoogleMapsError::NoRoutesFound);
        };

        let route = Route::from(route);
        debug!(
            distance_meters = route.distance_meters,
            duration = route.duration.as_deref().unwrap_or_default(),
            "Route computed"
        );
        Ok(route)
    }
}
