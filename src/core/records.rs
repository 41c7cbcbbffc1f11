//! Aggregate count records supplied by the statistics collaborator.
//!
//! Counts are expected to be non-negative; the transformers do not check.
//! Each `labeled_counts` lists fields in the order the dashboard renders them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyData {
    pub young_dependents: f64,
    pub working_age: f64,
    pub old_dependents: f64,
}

impl DependencyData {
    #[must_use]
    pub fn new(young_dependents: f64, working_age: f64, old_dependents: f64) -> Self {
        Self {
            young_dependents,
            working_age,
            old_dependents,
        }
    }

    #[must_use]
    pub fn labeled_counts(&self) -> [(&'static str, f64); 3] {
        [
            ("Young (0-14)", self.young_dependents),
            ("Working Age (15-64)", self.working_age),
            ("Old (65+)", self.old_dependents),
        ]
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        sum_counts(&self.labeled_counts())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SexData {
    pub male: f64,
    pub female: f64,
}

impl SexData {
    #[must_use]
    pub fn new(male: f64, female: f64) -> Self {
        Self { male, female }
    }

    #[must_use]
    pub fn labeled_counts(&self) -> [(&'static str, f64); 2] {
        [("Male", self.male), ("Female", self.female)]
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        sum_counts(&self.labeled_counts())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CivilStatusData {
    pub single: f64,
    pub married: f64,
    pub widowed: f64,
    pub divorced: f64,
    pub separated: f64,
    pub annulled: f64,
    pub registered_partnership: f64,
    pub live_in: f64,
}

impl CivilStatusData {
    #[must_use]
    pub fn labeled_counts(&self) -> [(&'static str, f64); 8] {
        [
            ("Single", self.single),
            ("Married", self.married),
            ("Widowed", self.widowed),
            ("Divorced", self.divorced),
            ("Separated", self.separated),
            ("Annulled", self.annulled),
            ("Registered Partnership", self.registered_partnership),
            ("Live-in", self.live_in),
        ]
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        sum_counts(&self.labeled_counts())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentStatusData {
    pub employed: f64,
    pub unemployed: f64,
    pub self_employed: f64,
    pub student: f64,
    pub retired: f64,
    pub homemaker: f64,
    pub disabled: f64,
    pub other: f64,
}

impl EmploymentStatusData {
    #[must_use]
    pub fn labeled_counts(&self) -> [(&'static str, f64); 8] {
        [
            ("Employed", self.employed),
            ("Unemployed", self.unemployed),
            ("Self-employed", self.self_employed),
            ("Student", self.student),
            ("Retired", self.retired),
            ("Homemaker", self.homemaker),
            ("Disabled", self.disabled),
            ("Other", self.other),
        ]
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        sum_counts(&self.labeled_counts())
    }
}

fn sum_counts(counts: &[(&'static str, f64)]) -> f64 {
    counts.iter().map(|(_, value)| value).sum()
}
