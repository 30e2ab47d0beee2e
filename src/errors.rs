use thiserror::Error;

/// Failures raised by a [`FinanceSource`](crate::storage::FinanceSource).
///
/// The aggregation services never produce errors; these only travel from the
/// data source through the dashboard assembler to the caller, unchanged.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Data source unavailable: {0}")]
    Unavailable(String),
}

pub type SourceResult<T> = Result<T, SourceError>;
