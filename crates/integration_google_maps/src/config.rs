//! Google Maps Platform configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration shared by the geocoding and routes clients
#[derive(Clone, Serialize, Deserialize)]
pub struct GoogleMapsConfig {
    /// API key sent as the `key` query parameter and the `X-Goog-Api-Key` header
    #[serde(default = "empty_api_key", skip_serializing)]
    pub api_key: SecretString,

    /// Base URL for the Geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Base URL for the Routes API
    #[serde(default = "default_routes_base_url")]
    pub routes_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GoogleMapsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleMapsConfig")
            .field("api_key", &"[REDACTED]")
            .field("geocoding_base_url", &self.geocoding_base_url)
            .field("routes_base_url", &self.routes_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn empty_api_key() -> SecretString {
    SecretString::from(String::new())
}

fn default_geocoding_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

fn default_routes_base_url() -> String {
    "https://routes.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for GoogleMapsConfig {
    fn default() -> Self {
        Self {
            api_key: empty_api_key(),
            geocoding_base_url: default_geocoding_base_url(),
            routes_base_url: default_routes_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GoogleMapsConfig {
    /// Default endpoints with the given API key
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
            geocoding_base_url: base_url.to_string(),
            routes_base_url: base_url.to_string(),
            timeout_secs: 5,
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

        if self.geocoding_base_url.is_empty() {
            return Err("geocoding_base_url must not be empty".to_string());
        }

        if self.routes_base_url.is_empty() {
            return Err("routes_base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
