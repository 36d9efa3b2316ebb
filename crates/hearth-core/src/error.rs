use hearth_domain::MonthKeyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("storage backend failure: {0}")]
    Storage(String),
    #[error("invalid month key: {0}")]
    InvalidMonth(#[from] MonthKeyError),
    #[error("validation failed: {0}")]
    Validation(String),
}
