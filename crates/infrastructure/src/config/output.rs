//! Output configurations: history log and chart.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chart::ChartSeries;

pub(super) const DEFAULT_HISTORY_PATH: &str = "data/history.csv";
pub(super) const DEFAULT_CHART_PATH: &str = "co2_vs_distance.png";

// ==============================
// History Configuration
// ==============================

/// History log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryAppConfig {
    /// CSV file holding every recorded trip
    #[serde(default = "default_history_path")]
    pub path: PathBuf,
}

fn default_history_path() -> PathBuf {
    PathBuf::from(DEFAULT_HISTORY_PATH)
}

impl Default for HistoryAppConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
        }
    }
}

impl HistoryAppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("path must not be empty".to_string());
        }
        Ok(())
    }
}

// ==============================
// Chart Configuration
// ==============================

/// Chart output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartAppConfig {
    /// PNG file, overwritten on every render
    #[serde(default = "default_chart_path")]
    pub path: PathBuf,

    /// Image width in pixels
    #[serde(default = "default_chart_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_chart_height")]
    pub height: u32,

    /// Which points to plot
    #[serde(default)]
    pub series: ChartSeries,
}

fn default_chart_path() -> PathBuf {
    PathBuf::from(DEFAULT_CHART_PATH)
}

const fn default_chart_width() -> u32 {
    800
}

const fn default_chart_height() -> u32 {
    600
}

impl Default for ChartAppConfig {
    fn default() -> Self {
        Self {
            path: default_chart_path(),
            width: default_chart_width(),
            height: default_chart_height(),
            series: ChartSeries::default(),
        }
    }
}

impl ChartAppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let is_png = self
            .path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            return Err(format!("path must be a .png file, got {}", self.path.display()));
        }

        if self.width == 0 || self.height == 0 {
            return Err("width and height must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_validation() {
        assert!(HistoryAppConfig::default().validate().is_ok());
        let config = HistoryAppConfig {
            path: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_chart_requires_png() {
        let config = ChartAppConfig {
            path: PathBuf::from("chart.svg"),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ChartAppConfig {
            path: PathBuf::from("out/Chart.PNG"),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chart_deserialize_series() {
        let config: ChartAppConfig =
            serde_json::from_str(r#"{"series": "per_trip", "height": 400}"#).unwrap();
        assert_eq!(config.series, ChartSeries::PerTrip);
        assert_eq!(config.height, 400);
        assert_eq!(config.width, 800);
    }
}
