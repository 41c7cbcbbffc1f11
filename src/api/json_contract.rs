use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{ChartData, ChartPipelineConfig, ChartPresentation, build_chart};

pub const CHART_PRESENTATION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPresentationJsonContractV1 {
    pub schema_version: u32,
    pub presentation: ChartPresentation,
}

impl ChartPresentation {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart presentation json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartPresentationJsonContractV1 {
            schema_version: CHART_PRESENTATION_JSON_SCHEMA_V1,
            presentation: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!(
                "failed to serialize chart presentation contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare presentation or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(presentation) = serde_json::from_str::<ChartPresentation>(input) {
            return Ok(presentation);
        }
        let payload: ChartPresentationJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!(
                    "failed to parse chart presentation json payload: {e}"
                ))
            })?;
        if payload.schema_version != CHART_PRESENTATION_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart presentation schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.presentation)
    }
}

/// Dashboard request: the counts to chart plus how to present them.
///
/// ```json
/// { "chart": { "type": "sex", "data": { "male": 150, "female": 175 } },
///   "config": { "sort_descending": true } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub chart: ChartData,
    #[serde(default)]
    pub config: ChartPipelineConfig,
}

impl ChartRequest {
    #[must_use]
    pub fn new(chart: impl Into<ChartData>, config: ChartPipelineConfig) -> Self {
        Self {
            chart: chart.into(),
            config,
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart request: {e}")))
    }

    #[must_use]
    pub fn build(&self) -> ChartPresentation {
        build_chart(&self.chart, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::{CHART_PRESENTATION_JSON_SCHEMA_V1, ChartRequest};
    use crate::api::ChartPresentation;

    #[test]
    fn request_without_config_uses_defaults() {
        let request = ChartRequest::from_json_str(
            r#"{"chart":{"type":"sex","data":{"male":1,"female":1}}}"#,
        )
        .expect("request");
        let presentation = request.build();
        assert_eq!(presentation.title, "Sex Distribution");
        assert_eq!(presentation.points[0].percentage, 50.0);
    }

    #[test]
    fn contract_declares_schema_version() {
        let request = ChartRequest::from_json_str(
            r#"{"chart":{"type":"sex","data":{"male":1,"female":3}}}"#,
        )
        .expect("request");
        let json = request.build().to_json_contract_v1_pretty().expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(
            value["schema_version"],
            serde_json::json!(CHART_PRESENTATION_JSON_SCHEMA_V1)
        );
        assert_eq!(value["presentation"]["chart_type"], "sex");
    }

    #[test]
    fn unsupported_schema_version_is_rejected() {
        let input = r#"{"schema_version":2,"presentation":{"chart_type":"sex",
            "title":"t","total":0.0,"points":[]}}"#;
        let err = ChartPresentation::from_json_compat_str(input).expect_err("v2 unsupported");
        assert!(format!("{err}").contains("unsupported chart presentation schema version: 2"));
    }
}
