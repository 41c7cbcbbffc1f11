//! Category-agnostic post-processing over already transformed points.
//!
//! None of these functions mutate their input.

use ordered_float::OrderedFloat;

use crate::core::types::ChartDataPoint;

#[must_use]
pub fn calculate_total(points: &[ChartDataPoint]) -> f64 {
    points.iter().map(|point| point.value).sum()
}

/// Keeps points with `value > 0`, preserving their relative order.
#[must_use]
pub fn filter_empty_points(points: &[ChartDataPoint]) -> Vec<ChartDataPoint> {
    points
        .iter()
        .filter(|point| point.value > 0.0)
        .cloned()
        .collect()
}

/// Returns a copy ordered by `value` descending.
///
/// The sort is stable: tied points keep their input order.
#[must_use]
pub fn sort_by_value(points: &[ChartDataPoint]) -> Vec<ChartDataPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| OrderedFloat(b.value).cmp(&OrderedFloat(a.value)));
    sorted
}

/// Point with the largest value; the first one wins on ties.
#[must_use]
pub fn max_point(points: &[ChartDataPoint]) -> Option<&ChartDataPoint> {
    points.iter().reduce(|best, candidate| {
        if candidate.value > best.value {
            candidate
        } else {
            best
        }
    })
}

/// Point with the smallest value; the first one wins on ties.
#[must_use]
pub fn min_point(points: &[ChartDataPoint]) -> Option<&ChartDataPoint> {
    points.iter().reduce(|best, candidate| {
        if candidate.value < best.value {
            candidate
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{calculate_total, filter_empty_points, max_point, min_point, sort_by_value};
    use crate::core::types::ChartDataPoint;

    fn point(label: &str, value: f64) -> ChartDataPoint {
        ChartDataPoint::new(label, value, 0.0)
    }

    #[test]
    fn empty_input_is_handled_everywhere() {
        assert_eq!(calculate_total(&[]), 0.0);
        assert!(filter_empty_points(&[]).is_empty());
        assert!(sort_by_value(&[]).is_empty());
        assert!(max_point(&[]).is_none());
        assert!(min_point(&[]).is_none());
    }

    #[test]
    fn ties_resolve_to_first_point() {
        let points = vec![point("a", 3.0), point("b", 3.0), point("c", 1.0), point("d", 1.0)];
        assert_eq!(max_point(&points).map(|p| p.label.as_str()), Some("a"));
        assert_eq!(min_point(&points).map(|p| p.label.as_str()), Some("c"));
    }

    #[test]
    fn sort_keeps_input_untouched() {
        let points = vec![point("low", 1.0), point("high", 9.0)];
        let sorted = sort_by_value(&points);
        assert_eq!(sorted[0].label, "high");
        assert_eq!(points[0].label, "low");
    }
}
