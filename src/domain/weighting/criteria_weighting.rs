//! Criteria Weighting - neutrosophic AHP.
//!
//! Turns qualitative pairwise judgments into a normalized weight vector:
//! score each judgment, map the score to a comparison ratio, fill the
//! reciprocal matrix, column-normalize, and average each row.

use serde::Serialize;
use tracing::{debug, warn};

use super::{ComparisonMatrix, Consistency, PairwiseJudgments, WeightVector, WeightingError};

/// Full result of a weight derivation.
#[derive(Debug, Clone, Serialize)]
pub struct WeightDerivation {
    pub matrix: ComparisonMatrix,
    pub weights: WeightVector,
    pub consistency: Consistency,
}

/// Neutrosophic AHP weighting functions.
pub struct CriteriaWeighting;

impl CriteriaWeighting {
    /// Derives criterion weights from pairwise judgments.
    ///
    /// The result is non-negative and sums to one up to floating error.
    ///
    /// # Errors
    /// `UnknownCriterion` when a judgment references a criterion outside
    /// `criteria`; see [`ComparisonMatrix::from_judgments`] for the rest.
    pub fn compute_weights(
        criteria: &[String],
        judgments: &PairwiseJudgments,
    ) -> Result<WeightVector, WeightingError> {
        Self::derive(criteria, judgments).map(|d| d.weights)
    }

    /// Derives weights together with the comparison matrix and its consistency.
    pub fn derive(
        criteria: &[String],
        judgments: &PairwiseJudgments,
    ) -> Result<WeightDerivation, WeightingError> {
        let matrix = ComparisonMatrix::from_judgments(criteria, judgments)?;
        let priorities = matrix.priority_vector();
        let consistency = matrix.consistency(&priorities);
        let weights = WeightVector::new(criteria, &priorities);

        debug!(
            criteria = criteria.len(),
            judgments = judgments.len(),
            consistency_ratio = consistency.ratio,
            "Derived criterion weights"
        );

        if !consistency.is_acceptable() {
            warn!(
                consistency_ratio = consistency.ratio,
                "Pairwise judgments are inconsistent"
            );
        }

        Ok(WeightDerivation {
            matrix,
            weights,
            consistency,
        })
    }
}
