//! Chart rendering

mod plotters_chart_renderer;

pub use plotters_chart_renderer::{
    CHART_TITLE, ChartSeries, PlottersChartRenderer, X_AXIS_LABEL, Y_AXIS_LABEL,
};
