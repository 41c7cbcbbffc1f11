use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unrecognized chart type: {0}")]
    UnrecognizedChartType(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
