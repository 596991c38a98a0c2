//! CO2-equivalent mass value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A non-negative CO2-equivalent mass, stored in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Co2Mass {
    kilograms: f64,
}

impl Co2Mass {
    /// Create a mass from kilograms
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` for negative or non-finite values.
    pub fn from_kilograms(kilograms: f64) -> Result<Self, DomainError> {
        if !kilograms.is_finite() || kilograms < 0.0 {
            return Err(DomainError::InvalidQuantity {
                quantity: "CO2 mass",
                value: kilograms,
            });
        }
        Ok(Self { kilograms })
    }

    /// Create a mass from grams
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` for negative or non-finite values.
    pub fn from_grams(grams: f64) -> Result<Self, DomainError> {
        Self::from_kilograms(grams / 1000.0)
    }

    /// Create a mass from metric tonnes
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` for negative or non-finite values.
    pub fn from_tonnes(tonnes: f64) -> Result<Self, DomainError> {
        Self::from_kilograms(tonnes * 1000.0)
    }

    /// Mass in kilograms
    #[must_use]
    pub const fn kilograms(&self) -> f64 {
        self.kilograms
    }
}

impl fmt::Display for Co2Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} kg", self.kilograms)
    }
}
