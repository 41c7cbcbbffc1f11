//! Dashboard-facing surface: typed dispatch, title resolution and chart
//! composition over the category transformers in [`crate::core`].

mod chart_builder;
mod chart_title;
mod dispatch;
mod json_contract;
mod pipeline_config;

pub use chart_builder::{ChartPresentation, build_chart};
pub use chart_title::chart_title;
#[allow(deprecated)]
pub use dispatch::transform_chart_data_legacy;
pub use dispatch::{ChartData, transform_chart_data, transform_chart_data_untyped};
pub use json_contract::{
    CHART_PRESENTATION_JSON_SCHEMA_V1, ChartPresentationJsonContractV1, ChartRequest,
};
pub use pipeline_config::ChartPipelineConfig;
