use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    ChartDataPoint, ChartType, filter_empty_points, max_point, min_point, sort_by_value,
};

use super::{ChartData, ChartPipelineConfig, chart_title, transform_chart_data};

/// A titled chart ready for the visualization layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPresentation {
    pub chart_type: ChartType,
    pub title: String,
    /// Sum of the source record, taken before any empty points are hidden.
    pub total: f64,
    pub points: Vec<ChartDataPoint>,
}

impl ChartPresentation {
    #[must_use]
    pub fn max_point(&self) -> Option<&ChartDataPoint> {
        max_point(&self.points)
    }

    #[must_use]
    pub fn min_point(&self) -> Option<&ChartDataPoint> {
        min_point(&self.points)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0.0
    }
}

/// Transforms `chart` and applies the post-processing `config` asks for.
///
/// Percentages always refer to the full record, so hiding empty points does
/// not rescale the remaining ones.
#[must_use]
pub fn build_chart(chart: &ChartData, config: &ChartPipelineConfig) -> ChartPresentation {
    let chart_type = chart.chart_type();
    let mut points = transform_chart_data(chart);
    let total = chart.total();

    if config.hide_empty {
        points = filter_empty_points(&points);
    }
    if config.sort_descending {
        points = sort_by_value(&points);
    }

    debug!(
        %chart_type,
        total,
        point_count = points.len(),
        hide_empty = config.hide_empty,
        sort_descending = config.sort_descending,
        "build chart"
    );

    ChartPresentation {
        chart_type,
        title: chart_title(chart_type, config.title.as_deref()),
        total,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::build_chart;
    use crate::api::{ChartData, ChartPipelineConfig};
    use crate::core::DependencyData;

    #[test]
    fn defaults_keep_transformer_output() {
        let chart = ChartData::Dependency(DependencyData::new(0.0, 8.0, 2.0));
        let presentation = build_chart(&chart, &ChartPipelineConfig::default());
        assert_eq!(presentation.title, "Age Distribution");
        assert_eq!(presentation.points.len(), 3);
        assert_eq!(presentation.total, 10.0);
    }

    #[test]
    fn hiding_empty_points_keeps_percentages() {
        let chart = ChartData::Dependency(DependencyData::new(0.0, 8.0, 2.0));
        let config = ChartPipelineConfig::new().with_hide_empty(true);
        let presentation = build_chart(&chart, &config);
        assert_eq!(presentation.points.len(), 2);
        assert_eq!(presentation.points[0].percentage, 80.0);
        assert_eq!(presentation.total, 10.0);
    }

    #[test]
    fn all_zero_record_is_empty() {
        let chart = ChartData::Dependency(DependencyData::default());
        let presentation = build_chart(&chart, &ChartPipelineConfig::default());
        assert!(presentation.is_empty());
        assert!(presentation.points.iter().all(|p| p.percentage == 0.0));
    }
}
