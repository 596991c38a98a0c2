//! Geocoding port
//!
//! Resolves free-text place names to coordinates.

use async_trait::async_trait;
use domain::value_objects::{GeoLocation, PlaceName};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place name to coordinate resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a place name to the coordinates of the best match
    async fn geocode(&self, place: &PlaceName) -> Result<GeoLocation, ApplicationError>;
}
