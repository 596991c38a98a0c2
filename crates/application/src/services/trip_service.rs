//! Trip recording service
//!
//! Runs one trip through geocoding, routing and emission estimation, then
//! appends it to the history log and re-renders the chart. The stages run
//! strictly in order and the first failure aborts the run: nothing is
//! persisted unless every lookup succeeded.

use std::{fmt, sync::Arc};

use domain::{
    TripHistory, TripRecord,
    value_objects::{Co2Mass, Distance, GeoLocation, PlaceName},
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::HistoryService;
use crate::{
    error::ApplicationError,
    ports::{ChartPort, EmissionPort, GeocodingPort, RoutingPort, TripHistoryPort},
};

/// Stages of a trip run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStage {
    /// Resolving the start place
    GeocodeStart,
    /// Resolving the end place
    GeocodeEnd,
    /// Asking the routing service for the driving distance
    ComputeDistance,
    /// Asking the emission service for the CO2 estimate
    ComputeEmissions,
    /// Appending to the history log and re-rendering the chart
    PersistAndRender,
}

impl fmt::Display for TripStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GeocodeStart => "geocode_start",
            Self::GeocodeEnd => "geocode_end",
            Self::ComputeDistance => "compute_distance",
            Self::ComputeEmissions => "compute_emissions",
            Self::PersistAndRender => "persist_and_render",
        };
        f.write_str(name)
    }
}

/// A validated request to record a trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    /// Where the trip started
    pub start: PlaceName,
    /// Where the trip ended
    pub end: PlaceName,
}

impl TripRequest {
    /// Create a request from two place names
    #[must_use]
    pub const fn new(start: PlaceName, end: PlaceName) -> Self {
        Self { start, end }
    }
}

/// Result of the lookup stages, before anything is persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripEstimate {
    /// Start place as entered
    pub start: PlaceName,
    /// End place as entered
    pub end: PlaceName,
    /// Resolved start coordinates
    pub start_location: GeoLocation,
    /// Resolved end coordinates
    pub end_location: GeoLocation,
    /// Driving distance
    pub distance: Distance,
    /// Estimated emissions
    pub co2: Co2Mass,
}

/// Result of a recorded trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    /// The computed values
    pub estimate: TripEstimate,
    /// The row appended to the history log
    pub record: TripRecord,
    /// Number of trips in the log after appending
    pub trips_recorded: usize,
}

/// Trip recording service
pub struct TripService {
    geocoder: Arc<dyn GeocodingPort>,
    router: Arc<dyn RoutingPort>,
    emissions: Arc<dyn EmissionPort>,
    records: HistoryService,
}

impl fmt::Debug for TripService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripService")
            .field("history", &self.records.history_location())
            .field("chart", &self.records.chart_location())
            .finish_non_exhaustive()
    }
}

impl TripService {
    /// Create a new trip service
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        router: Arc<dyn RoutingPort>,
        emissions: Arc<dyn EmissionPort>,
        history: Arc<dyn TripHistoryPort>,
        chart: Arc<dyn ChartPort>,
    ) -> Self {
        Self {
            geocoder,
            router,
            emissions,
            records: HistoryService::new(history, chart),
        }
    }

    /// Where the history log lives
    pub fn history_location(&self) -> String {
        self.records.history_location()
    }

    /// Where the chart is written
    pub fn chart_location(&self) -> String {
        self.records.chart_location()
    }

    /// Resolve both places, compute the distance and estimate emissions
    ///
    /// Nothing is persisted.
    #[instrument(skip(self), fields(start = %request.start, end = %request.end))]
    pub async fn estimate_trip(
        &self,
        request: &TripRequest,
    ) -> Result<TripEstimate, ApplicationError> {
        let start_location = self
            .geocoder
            .geocode(&request.start)
            .await
            .map_err(|e| stage_failed(TripStage::GeocodeStart, e))?;
        debug!(location = %start_location, "Resolved start place");

        let end_location = self
            .geocoder
            .geocode(&request.end)
            .await
            .map_err(|e| stage_failed(TripStage::GeocodeEnd, e))?;
        debug!(location = %end_location, "Resolved end place");

        let distance = self
            .router
            .route_distance(&start_location, &end_location)
            .await
            .map_err(|e| match e {
                ApplicationError::RouteNotFound { .. } => ApplicationError::RouteNotFound {
                    from: request.start.to_string(),
                    to: request.end.to_string(),
                },
                other => other,
            })
            .map_err(|e| stage_failed(TripStage::ComputeDistance, e))?;
        debug!(meters = distance.meters(), "Computed driving distance");

        let co2 = self
            .emissions
            .estimate_co2(distance)
            .await
            .map_err(|e| stage_failed(TripStage::ComputeEmissions, e))?;
        debug!(kilograms = co2.kilograms(), "Estimated emissions");

        Ok(TripEstimate {
            start: request.start.clone(),
            end: request.end.clone(),
            start_location,
            end_location,
            distance,
            co2,
        })
    }

    /// Run the whole pipeline and append the trip to the history log
    #[instrument(skip(self), fields(start = %request.start, end = %request.end))]
    pub async fn record_trip(&self, request: &TripRequest) -> Result<TripSummary, ApplicationError> {
        let estimate = self.estimate_trip(request).await?;

        let record = TripRecord::now(
            &estimate.start,
            &estimate.end,
            estimate.distance,
            estimate.co2,
        );

        let history = self
            .records
            .append_and_render(record.clone())
            .await
            .map_err(|e| stage_failed(TripStage::PersistAndRender, e))?;

        info!(
            distance_km = record.distance_km(),
            co2_kg = record.co2_kg(),
            trips = history.len(),
            "Trip recorded"
        );

        Ok(TripSummary {
            estimate,
            record,
            trips_recorded: history.len(),
        })
    }

    /// Load the history log
    pub async fn history(&self) -> Result<TripHistory, ApplicationError> {
        self.records.history().await
    }

    /// Re-render the chart from the current history log
    pub async fn render_chart(&self) -> Result<(), ApplicationError> {
        self.records.render_chart().await
    }
}

fn stage_failed(stage: TripStage, err: ApplicationError) -> ApplicationError {
    warn!(%stage, error = %err, "Trip run aborted");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{
        MockChartPort, MockEmissionPort, MockGeocodingPort, MockRoutingPort, MockTripHistoryPort,
    };
    use chrono::NaiveDate;
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn place(name: &str) -> PlaceName {
        PlaceName::new(name).unwrap()
    }

    fn request() -> TripRequest {
        TripRequest::new(place("New York"), place("Boston"))
    }

    fn new_york() -> GeoLocation {
        GeoLocation::new(40.7128, -74.0060).unwrap()
    }

    fn boston() -> GeoLocation {
        GeoLocation::new(42.3601, -71.0589).unwrap()
    }

    fn geocoder_ok() -> MockGeocodingPort {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .withf(|p| p.as_str() == "New York")
            .times(1)
            .returning(|_| Ok(new_york()));
        geocoder
            .expect_geocode()
            .withf(|p| p.as_str() == "Boston")
            .times(1)
            .returning(|_| Ok(boston()));
        geocoder
    }

    fn router_ok() -> MockRoutingPort {
        let mut router = MockRoutingPort::new();
        router
            .expect_route_distance()
            .withf(|o, d| *o == new_york() && *d == boston())
            .times(1)
            .returning(|_, _| Ok(Distance::from_meters(450_000.0).unwrap()));
        router
    }

    fn emissions_ok() -> MockEmissionPort {
        let mut emissions = MockEmissionPort::new();
        emissions
            .expect_estimate_co2()
            .with(eq(Distance::from_meters(450_000.0).unwrap()))
            .times(1)
            .returning(|_| Ok(Co2Mass::from_grams(25_000.0).unwrap()));
        emissions
    }

    fn untouched_history() -> MockTripHistoryPort {
        let mut history = MockTripHistoryPort::new();
        history.expect_load().never();
        history.expect_save().never();
        history
            .expect_location()
            .returning(|| "data/history.csv".to_string());
        history
    }

    fn untouched_chart() -> MockChartPort {
        let mut chart = MockChartPort::new();
        chart.expect_render().never();
        chart
            .expect_location()
            .returning(|| "co2_vs_distance.png".to_string());
        chart
    }

    fn service(
        geocoder: MockGeocodingPort,
        router: MockRoutingPort,
        emissions: MockEmissionPort,
        history: MockTripHistoryPort,
        chart: MockChartPort,
    ) -> TripService {
        TripService::new(
            Arc::new(geocoder),
            Arc::new(router),
            Arc::new(emissions),
            Arc::new(history),
            Arc::new(chart),
        )
    }

    fn existing_record() -> TripRecord {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        TripRecord::new("Los Angeles", "San Francisco", 615.0, 79.5, date)
    }

    #[tokio::test]
    async fn estimate_trip_chains_lookups() {
        let svc = service(
            geocoder_ok(),
            router_ok(),
            emissions_ok(),
            untouched_history(),
            untouched_chart(),
        );

        let estimate = svc.estimate_trip(&request()).await.unwrap();

        assert_eq!(estimate.start_location, new_york());
        assert_eq!(estimate.end_location, boston());
        assert_eq!(estimate.distance.meters(), 450_000.0);
        assert_eq!(estimate.co2.kilograms(), 25.0);
    }

    #[tokio::test]
    async fn record_trip_appends_saves_and_renders_in_order() {
        let mut seq = Sequence::new();

        let mut history = MockTripHistoryPort::new();
        history
            .expect_load()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(TripHistory::from_records(vec![existing_record()])));
        history
            .expect_save()
            .withf(|h| {
                h.len() == 2
                    && h.records()[0].start_city() == "Los Angeles"
                    && h.records()[1].start_city() == "New York"
                    && h.records()[1].distance_km() == 450.0
                    && h.records()[1].co2_kg() == 25.0
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        history
            .expect_location()
            .returning(|| "data/history.csv".to_string());

        let mut chart = MockChartPort::new();
        chart
            .expect_render()
            .withf(|h| h.len() == 2)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        chart
            .expect_location()
            .returning(|| "co2_vs_distance.png".to_string());

        let svc = service(geocoder_ok(), router_ok(), emissions_ok(), history, chart);
        let summary = svc.record_trip(&request()).await.unwrap();

        assert_eq!(summary.trips_recorded, 2);
        assert_eq!(summary.record.end_city(), "Boston");
        assert_eq!(summary.estimate.co2.kilograms(), 25.0);
    }

    #[tokio::test]
    async fn geocoding_failure_aborts_before_routing() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder.expect_geocode().times(1).returning(|p| {
            Err(ApplicationError::Geocoding {
                place: p.to_string(),
                reason: "Geocoding failed: ZERO_RESULTS".to_string(),
            })
        });
        let mut router = MockRoutingPort::new();
        router.expect_route_distance().never();
        let mut emissions = MockEmissionPort::new();
        emissions.expect_estimate_co2().never();

        let svc = service(
            geocoder,
            router,
            emissions,
            untouched_history(),
            untouched_chart(),
        );
        let err = svc.record_trip(&request()).await.unwrap_err();

        assert!(err.to_string().contains("ZERO_RESULTS"));
        assert!(err.to_string().contains("New York"));
    }

    #[tokio::test]
    async fn missing_route_is_reported_with_place_names() {
        let mut router = MockRoutingPort::new();
        router.expect_route_distance().times(1).returning(|o, d| {
            Err(ApplicationError::RouteNotFound {
                from: o.to_string(),
                to: d.to_string(),
            })
        });
        let mut emissions = MockEmissionPort::new();
        emissions.expect_estimate_co2().never();

        let svc = service(
            geocoder_ok(),
            router,
            emissions,
            untouched_history(),
            untouched_chart(),
        );
        let err = svc.record_trip(&request()).await.unwrap_err();

        match err {
            ApplicationError::RouteNotFound { from, to } => {
                assert_eq!(from, "New York");
                assert_eq!(to, "Boston");
            },
            other => unreachable!("expected RouteNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn emission_failure_leaves_history_untouched() {
        let mut emissions = MockEmissionPort::new();
        emissions
            .expect_estimate_co2()
            .times(1)
            .returning(|_| Err(ApplicationError::Network("connection reset".to_string())));

        let svc = service(
            geocoder_ok(),
            router_ok(),
            emissions,
            untouched_history(),
            untouched_chart(),
        );
        let err = svc.record_trip(&request()).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Network(_)));
    }

    #[tokio::test]
    async fn save_failure_skips_chart() {
        let mut history = MockTripHistoryPort::new();
        history.expect_load().returning(|| Ok(TripHistory::new()));
        history
            .expect_save()
            .returning(|_| Err(ApplicationError::Persistence("read-only".to_string())));
        history
            .expect_location()
            .returning(|| "data/history.csv".to_string());

        let svc = service(
            geocoder_ok(),
            router_ok(),
            emissions_ok(),
            history,
            untouched_chart(),
        );
        let err = svc.record_trip(&request()).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Persistence(_)));
    }

    #[tokio::test]
    async fn render_chart_uses_current_history() {
        let mut history = MockTripHistoryPort::new();
        history
            .expect_load()
            .times(1)
            .returning(|| Ok(TripHistory::from_records(vec![existing_record()])));
        history.expect_save().never();
        history
            .expect_location()
            .returning(|| "data/history.csv".to_string());

        let mut chart = MockChartPort::new();
        chart
            .expect_render()
            .withf(|h| h.len() == 1)
            .times(1)
            .returning(|_| Ok(()));
        chart
            .expect_location()
            .returning(|| "co2_vs_distance.png".to_string());

        let svc = service(
            MockGeocodingPort::new(),
            MockRoutingPort::new(),
            MockEmissionPort::new(),
            history,
            chart,
        );
        svc.render_chart().await.unwrap();
    }

    #[test]
    fn debug_shows_locations() {
        let svc = service(
            MockGeocodingPort::new(),
            MockRoutingPort::new(),
            MockEmissionPort::new(),
            untouched_history(),
            untouched_chart(),
        );
        let debug = format!("{svc:?}");
        assert!(debug.contains("TripService"));
        assert!(debug.contains("data/history.csv"));
    }

    #[test]
    fn stage_names() {
        assert_eq!(TripStage::GeocodeStart.to_string(), "geocode_start");
        assert_eq!(TripStage::PersistAndRender.to_string(), "persist_and_render");
    }
}
