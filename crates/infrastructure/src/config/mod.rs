//! Application configuration
//!
//! Split into focused sub-modules:
//! - `output`: history log and chart file settings
//! - `telemetry`: logging settings
//!
//! The `google` and `climatiq` sections deserialize straight into the
//! integration crates' own config structs.

mod output;
mod telemetry;

use std::path::Path;

use application::ApplicationError;
use integration_climatiq::ClimatiqConfig;
use integration_google_maps::GoogleMapsConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use output::{ChartAppConfig, HistoryAppConfig};
pub use telemetry::TelemetryAppConfig;

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "CARBON_TRACKER";

/// Separator between prefix, section and key (`CARBON_TRACKER__GOOGLE__API_KEY`)
pub const ENV_SEPARATOR: &str = "__";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Google Geocoding and Routes APIs
    #[serde(default)]
    pub google: GoogleMapsConfig,

    /// Climatiq emission estimates
    #[serde(default)]
    pub climatiq: ClimatiqConfig,

    /// History log location
    #[serde(default)]
    pub history: HistoryAppConfig,

    /// Chart output
    #[serde(default)]
    pub chart: ChartAppConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// Without `path`, `config.toml` (or any supported extension) in the
    /// working directory is read when present. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(
            path,
            config::Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
    }

    fn load_with_env(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = path.map_or_else(
            || config::File::with_name("config").required(false),
            |p| config::File::from(p).required(true),
        );

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("history.path", output::DEFAULT_HISTORY_PATH)?
            .set_default("chart.path", output::DEFAULT_CHART_PATH)?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., CARBON_TRACKER__CHART__WIDTH)
            .add_source(environment);

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Fill in API keys that the configuration left empty
    ///
    /// Configured keys always win over the fallbacks.
    #[must_use]
    pub fn with_fallback_keys(
        mut self,
        google_api_key: Option<String>,
        climatiq_api_key: Option<String>,
    ) -> Self {
        if let Some(key) = google_api_key.filter(|k| !k.trim().is_empty()) {
            if self.google.api_key.expose_secret().trim().is_empty() {
                self.google.api_key = SecretString::from(key);
            }
        }
        if let Some(key) = climatiq_api_key.filter(|k| !k.trim().is_empty()) {
            if self.climatiq.api_key.expose_secret().trim().is_empty() {
                self.climatiq.api_key = SecretString::from(key);
            }
        }
        self
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the first invalid section.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        check_section("google", self.google.validate())?;
        check_section("climatiq", self.climatiq.validate())?;
        self.validate_output()
    }

    /// Validate only the history and chart sections
    pub fn validate_output(&self) -> Result<(), ApplicationError> {
        check_section("history", self.history.validate())?;
        check_section("chart", self.chart.validate())
    }
}

fn check_section(name: &str, result: Result<(), String>) -> Result<(), ApplicationError> {
    result.map_err(|e| ApplicationError::Configuration(format!("{name}: {e}")))
}
