use crate::core::ChartType;

/// Resolves the heading shown above a chart.
///
/// A non-empty `custom_title` wins; otherwise the category's default title is used.
#[must_use]
pub fn chart_title(chart_type: ChartType, custom_title: Option<&str>) -> String {
    match custom_title {
        Some(title) if !title.is_empty() => title.to_owned(),
        _ => chart_type.default_title().to_owned(),
    }
}
