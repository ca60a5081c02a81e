//! Delivery outcomes and their running tally.

use serde::{Deserialize, Serialize};

/// Result of one shipment handled by a forwarder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn from_success_flag(success: bool) -> Self {
        if success {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure)
    }
}

/// Counts over one alternative's full history, taken right after an append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutcomeTally {
    pub failures: usize,
    pub total: usize,
}

impl OutcomeTally {
    /// Tally over a slice of outcomes.
    pub fn of(outcomes: &[Outcome]) -> Self {
        Self {
            failures: outcomes.iter().filter(|o| o.is_failure()).count(),
            total: outcomes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_flag_maps_to_outcome() {
        assert_eq!(Outcome::from_success_flag(true), Outcome::Success);
        assert_eq!(Outcome::from_success_flag(false), Outcome::Failure);
    }

    #[test]
    fn tally_counts_failures_and_total() {
        let tally = OutcomeTally::of(&[
            Outcome::Success,
            Outcome::Failure,
            Outcome::Failure,
            Outcome::Success,
        ]);
        assert_eq!(tally.failures, 2);
        assert_eq!(tally.total, 4);
    }

    #[test]
    fn empty_tally_is_zero() {
        assert_eq!(OutcomeTally::of(&[]), OutcomeTally::default());
    }

    #[test]
    fn outcome_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Outcome::Failure).unwrap(), "\"failure\"");
    }
}
