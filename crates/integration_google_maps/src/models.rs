//! Request and response shapes for the Google Maps Platform APIs

use serde::{Deserialize, Serialize};

/// A computed driving route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Route length in meters
    pub distance_meters: u64,
    /// Travel duration as returned by the API (e.g. `"14400s"`)
    pub duration: Option<String>,
}

impl Route {
    /// Travel duration in whole seconds, if present and well-formed
    #[must_use]
    pub fn duration_secs(&self) -> Option<u64> {
        let raw = self.duration.as_deref()?.strip_suffix('s')?;
        raw.split('.').next()?.parse().ok()
    }
}

// ==============================
// Geocoding API
// ==============================

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// ==============================
// Routes API
// ==============================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ComputeRoutesRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub travel_mode: TravelMode,
    pub routing_preference: RoutingPreference,
    pub compute_alternative_routes: bool,
    pub route_modifiers: RouteModifiers,
    pub units: Units,
}

#[derive(Debug, Serialize)]
pub(crate) struct Waypoint {
    pub location: Location,
}

impl Waypoint {
    pub const fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            location: Location {
                lat_lng: LatLngLiteral {
                    latitude,
                    longitude,
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Location {
    pub lat_lng: LatLngLiteral,
}

#[derive(Debug, Serialize)]
pub(crate) struct LatLngLiteral {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum TravelMode {
    Drive,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum RoutingPreference {
    TrafficAware,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Units {
    Metric,
}

#[allow(clippy::struct_excessive_bools)] // Mirrors the API's routeModifiers object
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RouteModifiers {
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    pub avoid_ferries: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ComputeRoutesResponse {
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

/// proto3 JSON omits zero values, so a zero-length route has no `distanceMeters`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawRoute {
    #[serde(default)]
    pub distance_meters: u64,
    pub duration: Option<String>,
}

impl From<RawRoute> for Route {
    fn from(raw: RawRoute) -> Self {
        Self {
            distance_meters: raw.distance_meters,
            duration: raw.duration,
        }
    }
}

// ==============================
// Errors
// ==============================

#[derive(Debug, Deserialize)]
pub(crate) struct GoogleErrorResponse {
    pub error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoogleErrorBody {
    pub message: String,
}
