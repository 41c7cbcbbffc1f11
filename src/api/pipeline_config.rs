use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// How a dashboard wants a single chart prepared.
///
/// This type is serializable so report layouts can be stored alongside the
/// query that feeds them. Missing fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPipelineConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub hide_empty: bool,
    #[serde(default)]
    pub sort_descending: bool,
}

impl ChartPipelineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_hide_empty(mut self, hide_empty: bool) -> Self {
        self.hide_empty = hide_empty;
        self
    }

    #[must_use]
    pub fn with_sort_descending(mut self, sort_descending: bool) -> Self {
        self.sort_descending = sort_descending;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart pipeline config: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart pipeline config: {e}"))
        })
    }
}
