use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fill color for the "Male" slice, shared with the dashboard's sex chart.
pub const SEX_MALE_COLOR: &str = "#3b82f6";
/// Fill color for the "Female" slice, shared with the dashboard's sex chart.
pub const SEX_FEMALE_COLOR: &str = "#a855f7";

/// One normalized, presentation-ready chart entry.
///
/// `color` is empty when the category leaves styling to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub label: String,
    pub value: f64,
    pub percentage: f64,
    pub color: String,
}

impl ChartDataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, percentage: f64) -> Self {
        Self {
            label: label.into(),
            value,
            percentage,
            color: String::new(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn has_color(&self) -> bool {
        !self.color.is_empty()
    }
}

/// Demographic chart category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    #[serde(rename = "dependency")]
    Dependency,
    #[serde(rename = "sex")]
    Sex,
    #[serde(rename = "civilStatus")]
    CivilStatus,
    #[serde(rename = "employment")]
    Employment,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::Dependency,
        ChartType::Sex,
        ChartType::CivilStatus,
        ChartType::Employment,
    ];

    /// Wire tag used by dashboard requests.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dependency => "dependency",
            Self::Sex => "sex",
            Self::CivilStatus => "civilStatus",
            Self::Employment => "employment",
        }
    }

    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Dependency => "Age Distribution",
            Self::Sex => "Sex Distribution",
            Self::CivilStatus => "Civil Status Distribution",
            Self::Employment => "Employment Status",
        }
    }

    /// Number of points a transformer emits for this category.
    #[must_use]
    pub const fn category_count(self) -> usize {
        match self {
            Self::Dependency => 3,
            Self::Sex => 2,
            Self::CivilStatus | Self::Employment => 8,
        }
    }

    pub fn parse_tag(tag: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|chart_type| chart_type.as_str() == tag)
            .ok_or_else(|| ChartError::UnrecognizedChartType(tag.to_owned()))
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_tag(s)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
