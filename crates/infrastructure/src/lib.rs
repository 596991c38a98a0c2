//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer: Google Maps and
//! Climatiq adapters, the CSV history store and the PNG chart renderer.
//! Also owns configuration loading and logging setup.

pub mod adapters;
pub mod bootstrap;
pub mod chart;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use bootstrap::{build_history_service, build_trip_service};
pub use chart::{ChartSeries, PlottersChartRenderer};
pub use config::{AppConfig, ChartAppConfig, HistoryAppConfig, TelemetryAppConfig};
pub use persistence::CsvTripHistoryStore;
pub use telemetry::{TelemetryError, init_logging, log_filter_from_verbosity};
