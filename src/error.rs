use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no start date specified")]
    MissingStartDate,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("ticket store error: {0}")]
    Store(String),
}
