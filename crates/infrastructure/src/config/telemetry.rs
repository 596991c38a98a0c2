//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryAppConfig {
    /// Log filter directive (e.g. "info", "infrastructure=debug");
    /// when unset, the CLI verbosity decides
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json: bool,
}
