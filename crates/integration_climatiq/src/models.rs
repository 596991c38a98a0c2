//! Request and response shapes for the Climatiq estimate endpoint

use serde::{Deserialize, Serialize};

/// Estimated emissions as reported by Climatiq
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmissionEstimate {
    /// CO2-equivalent amount, in `co2e_unit`
    pub co2e: f64,
    /// Unit of `co2e`; grams when absent
    #[serde(default)]
    pub co2e_unit: Option<String>,
}

impl EmissionEstimate {
    /// The estimate in kilograms, or `None` for an unsupported unit
    #[must_use]
    pub fn kilograms(&self) -> Option<f64> {
        match self.co2e_unit.as_deref().map(str::trim) {
            None | Some("g") => Some(self.co2e / 1000.0),
            Some("kg") => Some(self.co2e),
            Some("t") => Some(self.co2e * 1000.0),
            Some(_) => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EstimateRequest<'a> {
    pub emission_factor: EmissionFactor<'a>,
    pub parameters: DistanceParameters,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmissionFactor<'a> {
    pub activity_id: &'a str,
    pub data_version: &'a str,
    pub region: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct DistanceParameters {
    pub distance: f64,
    pub distance_unit: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClimatiqErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ClimatiqErrorResponse {
    pub fn into_message(self) -> Option<String> {
        match (self.error, self.message) {
            (Some(error), Some(message)) => Some(format!("{error}: {message}")),
            (error, message) => message.or(error),
        }
    }
}
