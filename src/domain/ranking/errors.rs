//! Ranking errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Axis of a decision matrix dimension check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixAxis {
    /// Rows, one per alternative.
    Rows,
    /// Columns, one per criterion.
    Columns,
}

impl std::fmt::Display for MatrixAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixAxis::Rows => write!(f, "rows"),
            MatrixAxis::Columns => write!(f, "columns"),
        }
    }
}

/// Errors raised while loading or ranking alternatives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("Malformed decision matrix: {0}")]
    MalformedMatrix(String),

    #[error("Decision matrix has {actual} {axis}, expected {expected}")]
    DimensionMismatch {
        axis: MatrixAxis,
        expected: usize,
        actual: usize,
    },

    #[error("Criterion '{criterion}' has a zero-norm column")]
    DegenerateColumn { criterion: String },

    #[error("No benefit/cost direction given for criterion '{0}'")]
    MissingDirection(String),

    #[error("No weight given for criterion '{0}'")]
    MissingWeight(String),

    #[error("Weight for criterion '{criterion}' must be finite and non-negative, got {weight}")]
    InvalidWeight { criterion: String, weight: f64 },

    #[error("Alternative '{0}' is listed more than once")]
    DuplicateAlternative(String),

    #[error("No alternatives loaded")]
    NotLoaded,
}

impl RankingError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RankingError::MalformedMatrix(reason.into())
    }
}

impl From<RankingError> for DomainError {
    fn from(err: RankingError) -> Self {
        let code = match &err {
            RankingError::MalformedMatrix(_) | RankingError::DimensionMismatch { .. } => {
                ErrorCode::MalformedMatrix
            }
            RankingError::DegenerateColumn { .. } => ErrorCode::DegenerateColumn,
            _ => ErrorCode::ValidationFailed,
        };
        DomainError::new(code, err.to_string())
    }
}
