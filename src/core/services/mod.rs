pub mod budget_service;
pub mod record_service;
pub mod summary_service;

pub use budget_service::BudgetService;
pub use record_service::RecordService;
pub use summary_service::SummaryService;

use crate::errors::{FinanceError, ValidationError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Finance(#[from] FinanceError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Invalid(String),
}
