//! Climatiq API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use tracing::{debug, error, instrument};

use crate::config::ClimatiqConfig;
use crate::error::ClimatiqError;
use crate::models::{DistanceParameters, EmissionEstimate, EmissionFactor, EstimateRequest};

/// Trait for emission estimate clients
#[async_trait]
pub trait EmissionClient: Send + Sync {
    /// Estimate the CO2e of driving `distance_km` kilometers, in kilograms
    async fn estimate_co2(&self, distance_km: f64) -> Result<f64, ClimatiqError>;
}

/// Climatiq API client
pub struct ClimatiqClient {
    client: Client,
    config: ClimatiqConfig,
}

impl std::fmt::Debug for ClimatiqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClimatiqClient")
            .field("base_url", &self.config.base_url)
            .field("activity_id", &self.config.activity_id)
            .finish_non_exhaustive()
    }
}

impl ClimatiqClient {
    /// Create a new Climatiq client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &ClimatiqConfig) -> Result<Self, ClimatiqError> {
        config.validate().map_err(ClimatiqError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("carbon-tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClimatiqError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/data/v1/estimate",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn build_request(&self, distance_km: f64) -> EstimateRequest<'_> {
        EstimateRequest {
            emission_factor: EmissionFactor {
                activity_id: &self.config.activity_id,
                data_version: &self.config.data_version,
                region: &self.config.region,
            },
            parameters: DistanceParameters {
                distance: distance_km,
                distance_unit: "km",
            },
        }
    }

    /// Fetch the raw estimate for `distance_km` kilometers
    ///
    /// # Errors
    ///
    /// Returns an error for invalid distances, transport failures and
    /// non-success responses.
    #[instrument(skip(self))]
    pub async fn estimate(&self, distance_km: f64) -> Result<EmissionEstimate, ClimatiqError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(ClimatiqError::InvalidDistance(distance_km));
        }

        debug!(activity_id = %self.config.activity_id, "Requesting emission estimate");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&self.build_request(distance_km))
            .send()
            .await
            .map_err(|e| {
                let err = ClimatiqError::from_transport(e, self.config.timeout_secs);
                error!(error = %err, "Network error in CO2 estimation");
                err
            })?;

        if !response.status().is_success() {
            return Err(ClimatiqError::from_response(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClimatiqError::ParseError(e.without_url().to_string()))
    }
}

#[async_trait]
impl EmissionClient for ClimatiqClient {
    async fn estimate_co2(&self, distance_km: f64) -> Result<f64, ClimatiqError> {
        let estimate = self.estimate(distance_km).await?;
        let kilograms = estimate.kilograms().ok_or_else(|| {
            ClimatiqError::ParseError(format!(
                "unsupported co2e_unit '{}'",
                estimate.co2e_unit.as_deref().unwrap_or_default()
            ))
        })?;

        debug!(distance_km, co2_kg = kilograms, "Emission estimate received");
        Ok(kilograms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ClimatiqClient {
        ClimatiqClient::new(&ClimatiqConfig::for_testing("http://127.0.0.1:1/")).unwrap()
    }

    #[test]
    fn test_new_rejects_missing_key() {
        assert!(matches!(
            ClimatiqClient::new(&ClimatiqConfig::default()),
            Err(ClimatiqError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(client().endpoint(), "http://127.0.0.1:1/data/v1/estimate");
    }

    #[test]
    fn test_build_request_uses_configured_factor() {
        let config = ClimatiqConfig {
            region: "GB".to_string(),
            ..ClimatiqConfig::for_testing("http://localhost")
        };
        let client = ClimatiqClient::new(&config).unwrap();
        let json = serde_json::to_value(client.build_request(12.5)).unwrap();
        assert_eq!(json["emission_factor"]["region"], "GB");
        assert_eq!(json["parameters"]["distance"], 12.5);
    }

    #[tokio::test]
    async fn test_negative_distance_rejected() {
        let err = client().estimate_co2(-1.0).await.unwrap_err();
        assert!(matches!(err, ClimatiqError::InvalidDistance(_)));
    }

    #[tokio::test]
    async fn test_nan_distance_rejected() {
        let err = client().estimate_co2(f64::NAN).await.unwrap_err();
        assert!(matches!(err, ClimatiqError::InvalidDistance(_)));
    }
}
