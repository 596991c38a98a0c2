//! tracing-subscriber initialization

use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetryAppConfig;

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to parse the log filter
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// Failed to install the tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Map a `-v` count to a log filter
pub const fn log_filter_from_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Pick the filter: `RUST_LOG` first, then the configured filter, then `fallback`
fn resolve_filter(config: &TelemetryAppConfig, fallback: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directives = config
        .log_filter
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .unwrap_or(fallback);
    EnvFilter::try_new(directives).map_err(|e| TelemetryError::Filter(e.to_string()))
}

/// Install the global subscriber, logging to stderr
///
/// `fallback_filter` applies when neither `RUST_LOG` nor
/// `telemetry.log_filter` is set.
///
/// # Errors
///
/// Returns an error if the filter does not parse or a global subscriber is
/// already installed.
pub fn init_logging(
    config: &TelemetryAppConfig,
    fallback_filter: &str,
) -> Result<(), TelemetryError> {
    let env_filter = resolve_filter(config, fallback_filter)?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    debug!(json = config.json, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(200), "trace");
    }

    #[test]
    fn test_invalid_configured_filter() {
        // Only meaningful when RUST_LOG is unset
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = TelemetryAppConfig {
            log_filter: Some("carbon=notalevel".to_string()),
            json: false,
        };
        assert!(matches!(
            resolve_filter(&config, "warn"),
            Err(TelemetryError::Filter(_))
        ));
    }

    #[test]
    fn test_blank_configured_filter_uses_fallback() {
        let config = TelemetryAppConfig {
            log_filter: Some("  ".to_string()),
            json: false,
        };
        assert!(resolve_filter(&config, "debug").is_ok());
    }

    #[test]
    fn test_init_twice_fails() {
        let config = TelemetryAppConfig::default();
        let _ = init_logging(&config, "warn");
        assert!(matches!(
            init_logging(&config, "warn"),
            Err(TelemetryError::Init(_))
        ));
    }
}
