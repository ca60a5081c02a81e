//! Calculation Validator - structural and numeric checks on ranking outputs.
//!
//! Every check reports; none corrects. A failed check blocks the audit
//! snapshot but never discards an already computed ranking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Accepted distance between the weight sum and `1.0`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.05;

/// One reason a validation did not pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationFailure {
    /// Empty matrix or rows of differing length.
    MalformedMatrix,
    /// Weight sum outside `1.0 ± WEIGHT_SUM_TOLERANCE`.
    WeightTolerance { sum: f64 },
    /// A score outside `[0, 1]`.
    ScoreRange { index: usize, score: f64 },
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::MalformedMatrix => {
                write!(f, "decision matrix is empty or has rows of differing length")
            }
            ValidationFailure::WeightTolerance { sum } => write!(
                f,
                "weights sum to {}, outside 1.0 ± {}",
                sum, WEIGHT_SUM_TOLERANCE
            ),
            ValidationFailure::ScoreRange { index, score } => {
                write!(f, "score {} at position {} is outside [0, 1]", score, index)
            }
        }
    }
}

/// Outcome of validating one ranking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub matrix_valid: bool,
    pub weights_valid: bool,
    pub scores_valid: bool,
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    /// True when all three checks passed.
    pub fn all_valid(&self) -> bool {
        self.matrix_valid && self.weights_valid && self.scores_valid
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return write!(f, "all checks passed");
        }
        let reasons: Vec<String> = self.failures.iter().map(ToString::to_string).collect();
        write!(f, "{}", reasons.join("; "))
    }
}

/// Validation predicates for decision matrices, weights and scores.
pub struct CalculationValidator;

impl CalculationValidator {
    /// True iff the matrix has at least one row and every row is as long as the first.
    pub fn validate_matrix(matrix: &[Vec<f64>]) -> bool {
        match matrix.first() {
            None => false,
            Some(first) => matrix.iter().all(|row| row.len() == first.len()),
        }
    }

    /// True iff the weights sum to `1.0` within [`WEIGHT_SUM_TOLERANCE`].
    pub fn validate_weights(weights: &BTreeMap<String, f64>) -> bool {
        let total: f64 = weights.values().sum();
        (total - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    /// True iff every score lies in `[0, 1]`.
    pub fn validate_scores(scores: &[f64]) -> bool {
        scores.iter().all(|s| (0.0..=1.0).contains(s))
    }

    /// Conjunction of the three predicates.
    pub fn validate_all(
        matrix: &[Vec<f64>],
        weights: &BTreeMap<String, f64>,
        scores: &[f64],
    ) -> bool {
        Self::validate_matrix(matrix) && Self::validate_weights(weights) && Self::validate_scores(scores)
    }

    /// Runs every predicate and records why any of them failed.
    pub fn report(
        matrix: &[Vec<f64>],
        weights: &BTreeMap<String, f64>,
        scores: &[f64],
    ) -> ValidationReport {
        let matrix_valid = Self::validate_matrix(matrix);
        let weights_valid = Self::validate_weights(weights);
        let scores_valid = Self::validate_scores(scores);

        let mut failures = Vec::new();
        if !matrix_valid {
            failures.push(ValidationFailure::MalformedMatrix);
        }
        if !weights_valid {
            failures.push(ValidationFailure::WeightTolerance {
                sum: weights.values().sum(),
            });
        }
        failures.extend(
            scores
                .iter()
                .enumerate()
                .filter(|(_, s)| !(0.0..=1.0).contains(*s))
                .map(|(index, &score)| ValidationFailure::ScoreRange { index, score }),
        );

        ValidationReport {
            matrix_valid,
            weights_valid,
            scores_valid,
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(values: &[(&str, f64)]) -> BTreeMap<String, f64> {
        values.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    // Matrix

    #[test]
    fn matrix_empty_is_invalid() {
        assert!(!CalculationValidator::validate_matrix(&[]));
    }

    #[test]
    fn matrix_ragged_is_invalid() {
        let matrix = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(!CalculationValidator::validate_matrix(&matrix));
    }

    #[test]
    fn matrix_rectangular_is_valid() {
        let matrix = vec![vec![1200.0, 92.0, 5.0], vec![1000.0, 85.0, 9.0]];
        assert!(CalculationValidator::validate_matrix(&matrix));
    }

    // Weights

    #[test]
    fn weights_exact_sum_is_valid() {
        assert!(CalculationValidator::validate_weights(&weights(&[("a", 0.5), ("b", 0.5)])));
    }

    #[test]
    fn weights_within_tolerance_are_valid() {
        assert!(CalculationValidator::validate_weights(&weights(&[("a", 0.5), ("b", 0.54)])));
        assert!(CalculationValidator::validate_weights(&weights(&[("a", 0.5), ("b", 0.46)])));
    }

    #[test]
    fn weights_outside_tolerance_are_invalid() {
        assert!(!CalculationValidator::validate_weights(&weights(&[("a", 0.5), ("b", 0.6)])));
        assert!(!CalculationValidator::validate_weights(&weights(&[("a", 0.5), ("b", 0.4)])));
    }

    #[test]
    fn weights_empty_or_nan_are_invalid() {
        assert!(!CalculationValidator::validate_weights(&BTreeMap::new()));
        assert!(!CalculationValidator::validate_weights(&weights(&[("a", f64::NAN)])));
    }

    // Scores

    #[test]
    fn scores_at_bounds_are_valid() {
        assert!(CalculationValidator::validate_scores(&[0.0, 0.5, 1.0]));
        assert!(CalculationValidator::validate_scores(&[]));
    }

    #[test]
    fn scores_out_of_range_are_invalid() {
        assert!(!CalculationValidator::validate_scores(&[0.5, 1.01]));
        assert!(!CalculationValidator::validate_scores(&[-0.01]));
        assert!(!CalculationValidator::validate_scores(&[f64::NAN]));
    }

    // Combined

    #[test]
    fn validate_all_is_conjunction() {
        let matrix = vec![vec![1.0, 2.0]];
        let good = weights(&[("a", 1.0)]);
        let bad = weights(&[("a", 2.0)]);

        assert!(CalculationValidator::validate_all(&matrix, &good, &[0.3]));
        assert!(!CalculationValidator::validate_all(&matrix, &bad, &[0.3]));
        assert!(!CalculationValidator::validate_all(&[], &good, &[0.3]));
        assert!(!CalculationValidator::validate_all(&matrix, &good, &[1.3]));
    }

    #[test]
    fn report_lists_each_failure() {
        let report = CalculationValidator::report(
            &[vec![1.0], vec![]],
            &weights(&[("a", 0.2)]),
            &[0.1, 1.5, -0.5],
        );

        assert!(!report.all_valid());
        assert!(!report.matrix_valid);
        assert!(!report.weights_valid);
        assert!(!report.scores_valid);
        assert_eq!(report.failures.len(), 4);
        assert_eq!(report.failures[0], ValidationFailure::MalformedMatrix);
        assert_eq!(
            report.failures[2],
            ValidationFailure::ScoreRange {
                index: 1,
                score: 1.5
            }
        );
    }

    #[test]
    fn report_for_valid_input_has_no_failures() {
        let report = CalculationValidator::report(&[vec![1.0]], &weights(&[("a", 1.0)]), &[1.0]);
        assert!(report.all_valid());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn report_display_joins_failures() {
        let report = CalculationValidator::report(&[], &weights(&[("a", 1.0)]), &[2.0]);
        assert_eq!(
            report.to_string(),
            "decision matrix is empty or has rows of differing length; \
             score 2 at position 0 is outside [0, 1]"
        );
    }

    #[test]
    fn failure_messages_are_readable() {
        let failure = ValidationFailure::ScoreRange {
            index: 2,
            score: 1.5,
        };
        assert_eq!(failure.to_string(), "score 1.5 at position 2 is outside [0, 1]");
    }
}
