//! Weighting errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while deriving criterion weights.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightingError {
    #[error("At least one criterion is required")]
    NoCriteria,

    #[error("Criterion '{0}' is declared more than once")]
    DuplicateCriterion(String),

    #[error("Judgment references unknown criterion '{0}'")]
    UnknownCriterion(String),

    #[error("Criterion '{0}' cannot be compared with itself")]
    SelfComparison(String),
}

impl From<WeightingError> for DomainError {
    fn from(err: WeightingError) -> Self {
        let code = match &err {
            WeightingError::UnknownCriterion(_) => ErrorCode::UnknownCriterion,
            _ => ErrorCode::ValidationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}
