//! Emission estimation port

use async_trait::async_trait;
use domain::value_objects::{Co2Mass, Distance};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for estimating CO2 emissions of a car trip
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EmissionPort: Send + Sync {
    /// Estimated CO2-equivalent emissions for driving `distance` in a passenger car
    async fn estimate_co2(&self, distance: Distance) -> Result<Co2Mass, ApplicationError>;
}
