//! Travel distance value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

const METERS_PER_KILOMETER: f64 = 1000.0;

/// A non-negative travel distance, stored in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Distance {
    meters: f64,
}

impl Distance {
    /// Create a distance from meters
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` for negative or non-finite values.
    pub fn from_meters(meters: f64) -> Result<Self, DomainError> {
        if !meters.is_finite() || meters < 0.0 {
            return Err(DomainError::InvalidQuantity {
                quantity: "distance",
                value: meters,
            });
        }
        Ok(Self { meters })
    }

    /// Create a distance from kilometers
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` for negative or non-finite values.
    pub fn from_kilometers(kilometers: f64) -> Result<Self, DomainError> {
        Self::from_meters(kilometers * METERS_PER_KILOMETER)
    }

    /// Distance in meters
    #[must_use]
    pub const fn meters(&self) -> f64 {
        self.meters
    }

    /// Distance in kilometers
    #[must_use]
    pub fn kilometers(&self) -> f64 {
        self.meters / METERS_PER_KILOMETER
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km", self.kilometers())
    }
}
