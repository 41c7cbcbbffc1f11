//! rbi-charts: demographic chart data for barangay dashboards.
//!
//! Turns aggregate resident counts (age bands, sex, civil status, employment
//! status) into ordered, percentage-normalized chart points. Everything here
//! is pure and synchronous; fetching the counts and drawing the chart belong
//! to the caller.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{
    ChartData, ChartPipelineConfig, ChartPresentation, build_chart, transform_chart_data,
};
pub use crate::core::{ChartDataPoint, ChartType};
pub use error::{ChartError, ChartResult};
