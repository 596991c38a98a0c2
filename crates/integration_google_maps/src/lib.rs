//! Google Maps Platform integration for Carbon Tracker
//!
//! Provides address geocoding via the
//! [Geocoding API](https://developers.google.com/maps/documentation/geocoding)
//! and driving distances via the
//! [Routes API](https://developers.google.com/maps/documentation/routes).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`GeocodingClient`] resolves
//! free-form addresses and is implemented by [`GoogleGeocodingClient`];
//! [`RoutesClient`] computes driving routes and is implemented by
//! [`GoogleRoutesClient`]. Both share [`GoogleMapsConfig`] and
//! [`GoogleMapsError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_google_maps::{GeocodingClient, GoogleGeocodingClient, GoogleMapsConfig};
//!
//! let config = GoogleMapsConfig::with_api_key("my-key");
//! let client = GoogleGeocodingClient::new(&config)?;
//! let location = client.geocode("Boston, MA").await?;
//! ```

mod config;
mod error;
mod geocoding;
mod models;
mod routes;

pub use config::GoogleMapsConfig;
pub use error::GoogleMapsError;
pub use geocoding::{GeocodingClient, GoogleGeocodingClient};
pub use models::Route;
pub use routes::{GoogleRoutesClient, ROUTES_FIELD_MASK, RoutesClient};
