use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown metric name: `{0}`")]
    UnknownMetric(String),

    #[error("no record with id `{0}`")]
    RecordNotFound(String),

    #[error("invalid metric selection: {selected} selected, at least {minimum} required")]
    InvalidSelection { selected: usize, minimum: usize },
}
