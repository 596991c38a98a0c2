//! Trip history service
//!
//! Reads the history log and keeps the chart in step with it. Needs no
//! external lookups, so it works without provider credentials.

use std::{fmt, sync::Arc};

use domain::{TripHistory, TripRecord};
use tracing::{info, instrument};

use crate::{
    error::ApplicationError,
    ports::{ChartPort, TripHistoryPort},
};

/// History log and chart operations
#[derive(Clone)]
pub struct HistoryService {
    history: Arc<dyn TripHistoryPort>,
    chart: Arc<dyn ChartPort>,
}

impl fmt::Debug for HistoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryService")
            .field("history", &self.history.location())
            .field("chart", &self.chart.location())
            .finish()
    }
}

impl HistoryService {
    /// Create a new history service
    pub fn new(history: Arc<dyn TripHistoryPort>, chart: Arc<dyn ChartPort>) -> Self {
        Self { history, chart }
    }

    /// Where the history log lives
    pub fn history_location(&self) -> String {
        self.history.location()
    }

    /// Where the chart is written
    pub fn chart_location(&self) -> String {
        self.chart.location()
    }

    /// Load the history log
    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<TripHistory, ApplicationError> {
        self.history.load().await
    }

    /// Re-render the chart from the current history log
    #[instrument(skip(self))]
    pub async fn render_chart(&self) -> Result<(), ApplicationError> {
        let history = self.history.load().await?;
        self.chart.render(&history).await?;
        info!(trips = history.len(), chart = %self.chart.location(), "Chart rendered");
        Ok(())
    }

    /// Append `record` to the log, save it and redraw the chart
    ///
    /// Returns the log as saved.
    pub(crate) async fn append_and_render(
        &self,
        record: TripRecord,
    ) -> Result<TripHistory, ApplicationError> {
        let mut history = self.history.load().await?;
        history.append(record);
        self.history.save(&history).await?;
        self.chart.render(&history).await?;
        Ok(history)
    }
}
