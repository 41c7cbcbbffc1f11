use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::core::{
    ChartDataPoint, ChartType, CivilStatusData, DependencyData, EmploymentStatusData, SexData,
    transform_civil_status_data, transform_dependency_data, transform_employment_status_data,
    transform_sex_data,
};
use crate::error::{ChartError, ChartResult};

/// A chart-type tag paired with the record shape that tag requires.
///
/// Serialized as `{ "type": "<tag>", "data": { ... } }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ChartData {
    #[serde(rename = "dependency")]
    Dependency(DependencyData),
    #[serde(rename = "sex")]
    Sex(SexData),
    #[serde(rename = "civilStatus")]
    CivilStatus(CivilStatusData),
    #[serde(rename = "employment")]
    Employment(EmploymentStatusData),
}

impl ChartData {
    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        match self {
            Self::Dependency(_) => ChartType::Dependency,
            Self::Sex(_) => ChartType::Sex,
            Self::CivilStatus(_) => ChartType::CivilStatus,
            Self::Employment(_) => ChartType::Employment,
        }
    }

    /// Record total, i.e. the sum of every count in the payload.
    #[must_use]
    pub fn total(&self) -> f64 {
        match self {
            Self::Dependency(data) => data.total(),
            Self::Sex(data) => data.total(),
            Self::CivilStatus(data) => data.total(),
            Self::Employment(data) => data.total(),
        }
    }

    /// Decodes an untyped payload into the record shape `chart_type` expects.
    pub fn from_untyped(chart_type: ChartType, data: &Value) -> ChartResult<Self> {
        match chart_type {
            ChartType::Dependency => decode_record(chart_type, data).map(Self::Dependency),
            ChartType::Sex => decode_record(chart_type, data).map(Self::Sex),
            ChartType::CivilStatus => decode_record(chart_type, data).map(Self::CivilStatus),
            ChartType::Employment => decode_record(chart_type, data).map(Self::Employment),
        }
    }
}

impl From<DependencyData> for ChartData {
    fn from(data: DependencyData) -> Self {
        Self::Dependency(data)
    }
}

impl From<SexData> for ChartData {
    fn from(data: SexData) -> Self {
        Self::Sex(data)
    }
}

impl From<CivilStatusData> for ChartData {
    fn from(data: CivilStatusData) -> Self {
        Self::CivilStatus(data)
    }
}

impl From<EmploymentStatusData> for ChartData {
    fn from(data: EmploymentStatusData) -> Self {
        Self::Employment(data)
    }
}

/// Routes `chart` to its category transformer.
#[must_use]
pub fn transform_chart_data(chart: &ChartData) -> Vec<ChartDataPoint> {
    let points = match chart {
        ChartData::Dependency(data) => transform_dependency_data(data),
        ChartData::Sex(data) => transform_sex_data(data),
        ChartData::CivilStatus(data) => transform_civil_status_data(data),
        ChartData::Employment(data) => transform_employment_status_data(data),
    };
    trace!(
        chart_type = %chart.chart_type(),
        point_count = points.len(),
        "transform chart data"
    );
    points
}

/// Runtime-checked dispatch for callers holding a string tag and a JSON payload.
///
/// The tag is validated before the payload, so an unknown tag is always
/// reported as [`ChartError::UnrecognizedChartType`].
pub fn transform_chart_data_untyped(
    type_tag: &str,
    data: &Value,
) -> ChartResult<Vec<ChartDataPoint>> {
    let chart_type = ChartType::parse_tag(type_tag)?;
    let chart = ChartData::from_untyped(chart_type, data)?;
    debug!(%chart_type, total = chart.total(), "untyped chart dispatch");
    Ok(transform_chart_data(&chart))
}

/// Loosely typed entry point kept for older dashboard call sites.
#[deprecated(
    since = "0.1.0",
    note = "build a `ChartData` and call `transform_chart_data`, or use `transform_chart_data_untyped`"
)]
pub fn transform_chart_data_legacy(
    type_tag: &str,
    data: &Value,
) -> ChartResult<Vec<ChartDataPoint>> {
    transform_chart_data_untyped(type_tag, data)
}

fn decode_record<T: DeserializeOwned>(chart_type: ChartType, data: &Value) -> ChartResult<T> {
    T::deserialize(data).map_err(|e| {
        ChartError::InvalidData(format!("payload does not match `{chart_type}` chart data: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ChartData, transform_chart_data, transform_chart_data_untyped};
    use crate::core::{ChartType, SexData};

    #[test]
    fn chart_type_follows_variant() {
        let chart = ChartData::from(SexData::new(1.0, 2.0));
        assert_eq!(chart.chart_type(), ChartType::Sex);
        assert_eq!(chart.total(), 3.0);
    }

    #[test]
    fn untyped_rejects_unknown_tag_before_payload() {
        let err = transform_chart_data_untyped("unknown", &json!({})).expect_err("unknown tag");
        assert!(format!("{err}").contains("unrecognized chart type: unknown"));
    }

    #[test]
    fn untyped_rejects_mismatched_payload() {
        let err = transform_chart_data_untyped("sex", &json!({ "single": 3 }))
            .expect_err("civil status payload under sex tag");
        assert!(format!("{err}").contains("`sex` chart data"));
    }

    #[test]
    fn untyped_matches_typed_dispatch() {
        let untyped = transform_chart_data_untyped("sex", &json!({ "male": 2, "female": 6 }))
            .expect("valid payload");
        let typed = transform_chart_data(&ChartData::Sex(SexData::new(2.0, 6.0)));
        assert_eq!(untyped, typed);
    }

    #[test]
    fn adjacently_tagged_serde_shape() {
        let chart = ChartData::Sex(SexData::new(1.0, 2.0));
        let value = serde_json::to_value(chart).expect("serialize");
        assert_eq!(value, json!({ "type": "sex", "data": { "male": 1.0, "female": 2.0 } }));
    }
}
