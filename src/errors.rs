use thiserror::Error;

/// Rejection reasons produced by the admission gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Date is required")]
    MissingDate,
    #[error("Date must be in YYYY-MM format")]
    InvalidDateFormat,
    #[error("{field} must be a valid non-negative number")]
    InvalidAmount { field: &'static str },
    #[error("Budget period `{0}` must be in YYYY-MM format")]
    InvalidPeriodKey(String),
    #[error("Unknown period type `{0}` (expected month, quarter, or year)")]
    UnknownPeriodType(String),
}

/// Error type that captures common finance store failures.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Record not found: {0}")]
    RecordNotFound(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FinanceError>;
