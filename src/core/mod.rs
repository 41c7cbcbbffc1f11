pub mod category_transform;
pub mod chart_utils;
pub mod records;
pub mod types;

pub use category_transform::{
    percentage_of, transform_civil_status_data, transform_dependency_data,
    transform_employment_status_data, transform_sex_data,
};
pub use chart_utils::{calculate_total, filter_empty_points, max_point, min_point, sort_by_value};
pub use records::{CivilStatusData, DependencyData, EmploymentStatusData, SexData};
pub use types::{ChartDataPoint, ChartType, SEX_FEMALE_COLOR, SEX_MALE_COLOR};
