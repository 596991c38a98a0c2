//! Climatiq configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Climatiq client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ClimatiqConfig {
    /// API key sent as a bearer token
    #[serde(default = "empty_api_key", skip_serializing)]
    pub api_key: SecretString,

    /// Base URL for the Climatiq API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Emission factor activity
    #[serde(default = "default_activity_id")]
    pub activity_id: String,

    /// Emission factor data version selector
    #[serde(default = "default_data_version")]
    pub data_version: String,

    /// Emission factor region
    #[serde(default = "default_region")]
    pub region: String,
}

impl std::fmt::Debug for ClimatiqConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClimatiqConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("activity_id", &self.activity_id)
            .field("data_version", &self.data_version)
            .field("region", &self.region)
            .finish()
    }
}

fn empty_api_key() -> SecretString {
    SecretString::from(String::new())
}

fn default_base_url() -> String {
    "https://api.climatiq.io".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_activity_id() -> String {
    "passenger_vehicle-vehicle_type_car-fuel_source_na-engine_size_na-vehicle_age_na-vehicle_weight_na"
        .to_string()
}

fn default_data_version() -> String {
    "^15".to_string()
}

fn default_region() -> String {
    "US".to_string()
}

impl Default for ClimatiqConfig {
    fn default() -> Self {
        Self {
            api_key: empty_api_key(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            activity_id: default_activity_id(),
            data_version: default_data_version(),
            region: default_region(),
        }
    }
}

impl ClimatiqConfig {
    /// Default emission factor with the given API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: SecretString::from("fake_api_key".to_string()),
            base_url: base_url.to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.activity_id.trim().is_empty() {
            return Err("activity_id must not be empty".to_string());
        }

        Ok(())
    }
}
