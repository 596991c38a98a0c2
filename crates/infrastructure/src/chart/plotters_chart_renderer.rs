//! PNG chart of emissions against distance, drawn with plotters

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use application::error::ApplicationError;
use application::ports::ChartPort;
use async_trait::async_trait;
use domain::entities::TripHistory;
use plotters::prelude::*;
use plotters::style::register_font;
use serde::{Deserialize, Serialize};
use tokio::task;
use tracing::{debug, instrument};

use crate::config::ChartAppConfig;

/// Chart caption
pub const CHART_TITLE: &str = "CO2 Emissions vs Distance Travelled";
/// Horizontal axis description
pub const X_AXIS_LABEL: &str = "Distance travelled (km)";
/// Vertical axis description
pub const Y_AXIS_LABEL: &str = "CO2 usage (kg)";

/// Family the caption and axis text are drawn with
const FONT_FAMILY: &str = "sans-serif";

static FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Make the bundled font available to plotters; runs once per process
fn ensure_font() -> Result<(), ApplicationError> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();

    let ok = *REGISTERED
        .get_or_init(|| register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES).is_ok());
    if ok {
        Ok(())
    } else {
        Err(ApplicationError::Rendering(
            "bundled chart font could not be loaded".to_string(),
        ))
    }
}

/// Which values the chart plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSeries {
    /// Running totals of distance and CO2; the line only climbs
    #[default]
    Cumulative,
    /// Each trip's own distance and CO2, in insertion order
    PerTrip,
}

impl ChartSeries {
    /// The (distance_km, co2_kg) points for `history`
    #[must_use]
    pub fn points(self, history: &TripHistory) -> Vec<(f64, f64)> {
        match self {
            Self::Cumulative => history.cumulative_points(),
            Self::PerTrip => history.per_trip_points(),
        }
    }
}

impl fmt::Display for ChartSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cumulative => write!(f, "cumulative"),
            Self::PerTrip => write!(f, "per_trip"),
        }
    }
}

/// Renders the trip history to a PNG file
#[derive(Debug, Clone)]
pub struct PlottersChartRenderer {
    path: PathBuf,
    width: u32,
    height: u32,
    series: ChartSeries,
}

impl PlottersChartRenderer {
    /// Create a renderer writing `width`×`height` images to `path`
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32, series: ChartSeries) -> Self {
        Self {
            path: path.into(),
            width,
            height,
            series,
        }
    }

    /// Create a renderer from the chart configuration section
    pub fn from_config(config: &ChartAppConfig) -> Self {
        Self::new(config.path.clone(), config.width, config.height, config.series)
    }

    /// Output file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Upper axis bound with some headroom; unit range when there is nothing to show
fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max > 0.0 { max * 1.05 } else { 1.0 }
}

fn rendering_error(err: impl fmt::Display) -> ApplicationError {
    ApplicationError::Rendering(err.to_string())
}

fn draw_chart(
    path: &Path,
    size: (u32, u32),
    points: &[(f64, f64)],
) -> Result<(), ApplicationError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(rendering_error)?;
    }

    ensure_font()?;

    let x_max = axis_max(points.iter().map(|(x, _)| *x));
    let y_max = axis_max(points.iter().map(|(_, y)| *y));

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(rendering_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, (FONT_FAMILY, 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(rendering_error)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .draw()
        .map_err(rendering_error)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(rendering_error)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, 4, BLUE.filled())),
        )
        .map_err(rendering_error)?;

    root.present().map_err(rendering_error)?;
    Ok(())
}

#[async_trait]
impl ChartPort for PlottersChartRenderer {
    #[instrument(skip(self, history), fields(trips = history.len()))]
    async fn render(&self, history: &TripHistory) -> Result<(), ApplicationError> {
        let points = self.series.points(history);
        let path = self.path.clone();
        let size = (self.width, self.height);

        task::spawn_blocking(move || draw_chart(&path, size, &points))
            .await
            .map_err(|e| ApplicationError::Internal(e.to_string()))??;

        debug!(path = %self.path.display(), series = %self.series, "Chart written");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use domain::entities::TripRecord;

    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn history() -> TripHistory {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        TripHistory::from_records(vec![
            TripRecord::new("New York", "Boston", 346.2, 81.0, date),
            TripRecord::new("Boston", "Albany", 272.5, 64.0, date),
        ])
    }

    fn renderer(dir: &Path, series: ChartSeries) -> PlottersChartRenderer {
        PlottersChartRenderer::new(dir.join("chart.png"), 320, 240, series)
    }

    #[test]
    fn test_series_points() {
        let history = history();
        assert_eq!(
            ChartSeries::PerTrip.points(&history),
            vec![(346.2, 81.0), (272.5, 64.0)]
        );
        let cumulative = ChartSeries::Cumulative.points(&history);
        assert_eq!(cumulative.len(), 2);
        assert!((cumulative[1].0 - 618.7).abs() < 1e-9);
        assert!((cumulative[1].1 - 145.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_max() {
        assert!((axis_max(std::iter::empty()) - 1.0).abs() < f64::EPSILON);
        assert!((axis_max([0.0].into_iter()) - 1.0).abs() < f64::EPSILON);
        assert!((axis_max([10.0, 20.0].into_iter()) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_series_serde() {
        assert_eq!(
            serde_json::to_string(&ChartSeries::PerTrip).unwrap(),
            "\"per_trip\""
        );
        assert_eq!(ChartSeries::default(), ChartSeries::Cumulative);
        assert_eq!(ChartSeries::PerTrip.to_string(), "per_trip");
    }

    #[tokio::test]
    async fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer(dir.path(), ChartSeries::Cumulative);

        renderer.render(&history()).await.unwrap();

        let bytes = std::fs::read(renderer.path()).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }

    #[tokio::test]
    async fn test_render_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer(dir.path(), ChartSeries::PerTrip);

        renderer.render(&TripHistory::new()).await.unwrap();

        assert!(renderer.path().exists());
    }

    #[tokio::test]
    async fn test_render_creates_parent_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let renderer =
            PlottersChartRenderer::new(dir.path().join("charts/out.png"), 200, 150, ChartSeries::PerTrip);

        renderer.render(&TripHistory::new()).await.unwrap();
        renderer.render(&history()).await.unwrap();

        assert!(dir.path().join("charts/out.png").exists());
    }

    #[test]
    fn test_bundled_font_registers() {
        ensure_font().unwrap();
        ensure_font().unwrap();
    }

    #[test]
    fn test_draw_chart_with_labels_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labelled.png");

        draw_chart(&path, (640, 480), &[(100.0, 20.0), (250.0, 55.5)]).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_location() {
        let renderer = PlottersChartRenderer::from_config(&ChartAppConfig::default());
        assert_eq!(renderer.location(), "co2_vs_distance.png");
    }
}
