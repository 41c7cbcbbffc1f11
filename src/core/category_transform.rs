use crate::core::records::{CivilStatusData, DependencyData, EmploymentStatusData, SexData};
use crate::core::types::{ChartDataPoint, SEX_FEMALE_COLOR, SEX_MALE_COLOR};

/// Maps age-band counts to young, working-age and elderly points, in that order.
#[must_use]
pub fn transform_dependency_data(data: &DependencyData) -> Vec<ChartDataPoint> {
    project_counts(&data.labeled_counts(), &[])
}

/// Maps sex counts to "Male"/"Female" points carrying the fixed sex palette.
#[must_use]
pub fn transform_sex_data(data: &SexData) -> Vec<ChartDataPoint> {
    project_counts(&data.labeled_counts(), &[SEX_MALE_COLOR, SEX_FEMALE_COLOR])
}

#[must_use]
pub fn transform_civil_status_data(data: &CivilStatusData) -> Vec<ChartDataPoint> {
    project_counts(&data.labeled_counts(), &[])
}

#[must_use]
pub fn transform_employment_status_data(data: &EmploymentStatusData) -> Vec<ChartDataPoint> {
    project_counts(&data.labeled_counts(), &[])
}

/// Share of `total` held by `value`, in percent.
///
/// A zero total yields 0 rather than NaN: empty buckets are a normal state.
#[must_use]
pub fn percentage_of(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        (value / total) * 100.0
    } else {
        0.0
    }
}

// Colors are matched to counts by position; a missing entry means no color.
fn project_counts(counts: &[(&'static str, f64)], colors: &[&str]) -> Vec<ChartDataPoint> {
    let total: f64 = counts.iter().map(|(_, value)| value).sum();

    counts
        .iter()
        .enumerate()
        .map(|(index, &(label, value))| {
            let point = ChartDataPoint::new(label, value, percentage_of(value, total));
            match colors.get(index) {
                Some(color) => point.with_color(*color),
                None => point,
            }
        })
        .collect()
}
