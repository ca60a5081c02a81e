//! Criterion and direction - what is measured and which way is better.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Whether higher or lower raw values are preferred for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Higher is better (e.g. reliability).
    Benefit,
    /// Lower is better (e.g. cost, response time).
    Cost,
}

impl Direction {
    /// Maps the boolean "benefit flag" used by callers onto a direction.
    pub fn from_benefit_flag(is_benefit: bool) -> Self {
        if is_benefit {
            Direction::Benefit
        } else {
            Direction::Cost
        }
    }

    /// Returns true for benefit criteria.
    pub fn is_benefit(&self) -> bool {
        matches!(self, Direction::Benefit)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Benefit => write!(f, "benefit"),
            Direction::Cost => write!(f, "cost"),
        }
    }
}

/// A named decision criterion with its preference direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub direction: Direction,
}

impl Criterion {
    /// Creates a criterion, rejecting blank names.
    pub fn new(name: impl Into<String>, direction: Direction) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("criterion"));
        }
        Ok(Self { name, direction })
    }

    /// Shorthand for a benefit criterion.
    pub fn benefit(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, Direction::Benefit)
    }

    /// Shorthand for a cost criterion.
    pub fn cost(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, Direction::Cost)
    }
}
