//! Wiring of adapters into the application services

use std::sync::Arc;

use application::ApplicationError;
use application::services::{HistoryService, TripService};
use tracing::{info, instrument};

use crate::adapters::{EmissionAdapter, GeocodingAdapter, RoutingAdapter};
use crate::chart::PlottersChartRenderer;
use crate::config::AppConfig;
use crate::persistence::CsvTripHistoryStore;

/// Build a [`TripService`] backed by Google Maps, Climatiq, the CSV store
/// and the PNG renderer
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` for invalid configuration and
/// `ApplicationError::Internal` if an HTTP client cannot be created.
#[instrument(skip(config))]
pub fn build_trip_service(config: &AppConfig) -> Result<TripService, ApplicationError> {
    config.validate()?;

    let geocoder = Arc::new(GeocodingAdapter::new(&config.google)?);
    let router = Arc::new(RoutingAdapter::new(&config.google)?);
    let emissions = Arc::new(EmissionAdapter::new(&config.climatiq)?);
    let history = Arc::new(CsvTripHistoryStore::from_config(&config.history));
    let chart = Arc::new(PlottersChartRenderer::from_config(&config.chart));

    info!(
        history = %config.history.path.display(),
        chart = %config.chart.path.display(),
        series = %config.chart.series,
        "Trip service ready"
    );

    Ok(TripService::new(geocoder, router, emissions, history, chart))
}

/// Build a [`HistoryService`] over the CSV store and the PNG renderer
///
/// Only the history and chart sections are checked, so no provider
/// credentials are needed.
#[instrument(skip(config))]
pub fn build_history_service(config: &AppConfig) -> Result<HistoryService, ApplicationError> {
    config.validate_output()?;

    let history = Arc::new(CsvTripHistoryStore::from_config(&config.history));
    let chart = Arc::new(PlottersChartRenderer::from_config(&config.chart));
    Ok(HistoryService::new(history, chart))
}
