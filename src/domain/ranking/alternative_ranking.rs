//! Alternative Ranking - TOPSIS over a weighted decision matrix.
//!
//! # Algorithm
//! 1. Divide each column by its Euclidean norm.
//! 2. Multiply each column by its criterion weight.
//! 3. Ideal point: column max for benefit criteria, min for cost criteria;
//!    anti-ideal point: the opposite.
//! 4. `d+` / `d-`: Euclidean distance of each alternative to both points.
//! 5. Closeness `d- / (d+ + d-)`, sorted descending (stable).

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use super::{DecisionMatrix, MatrixAxis, RankedAlternative, RankingError, RankingResult};
use crate::domain::foundation::AlternativeId;
use crate::domain::weighting::{Direction, WeightVector};

/// Closeness assigned when an alternative coincides with both the ideal
/// and the anti-ideal point (`d+ + d- = 0`), e.g. a single alternative.
pub const INDIFFERENT_CLOSENESS: f64 = 0.5;

/// What to do with a criterion column whose Euclidean norm is zero.
///
/// A zero norm only happens when every alternative scores `0` on the
/// criterion, so the criterion cannot separate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateColumnPolicy {
    /// Treat the normalized column as all zeros: the criterion adds nothing
    /// to either distance.
    #[default]
    ZeroContribution,
    /// Fail with `RankingError::DegenerateColumn`.
    Reject,
}

/// TOPSIS ranking over a loaded set of alternatives.
#[derive(Debug, Clone, Default)]
pub struct AlternativeRanking {
    alternatives: Vec<AlternativeId>,
    matrix: Option<DecisionMatrix>,
    policy: DegenerateColumnPolicy,
}

impl AlternativeRanking {
    /// Creates an empty ranking using the default zero-norm policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ranking with an explicit zero-norm policy.
    pub fn with_policy(policy: DegenerateColumnPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> DegenerateColumnPolicy {
        self.policy
    }

    /// Loads alternatives and their performance rows.
    ///
    /// # Errors
    /// - `DimensionMismatch` when the row count differs from the id count
    /// - `DuplicateAlternative` when an id repeats
    pub fn load(
        &mut self,
        alternatives: Vec<AlternativeId>,
        matrix: DecisionMatrix,
    ) -> Result<(), RankingError> {
        if matrix.row_count() != alternatives.len() {
            return Err(RankingError::DimensionMismatch {
                axis: MatrixAxis::Rows,
                expected: alternatives.len(),
                actual: matrix.row_count(),
            });
        }

        let mut seen = HashSet::new();
        for id in &alternatives {
            if !seen.insert(id.as_str()) {
                return Err(RankingError::DuplicateAlternative(id.to_string()));
            }
        }

        self.alternatives = alternatives;
        self.matrix = Some(matrix);
        Ok(())
    }

    /// Loaded alternatives, in input order.
    pub fn alternatives(&self) -> &[AlternativeId] {
        &self.alternatives
    }

    /// Ranks the loaded alternatives.
    ///
    /// `criteria` names the matrix columns in order; `weights` and
    /// `directions` are looked up by criterion name.
    ///
    /// # Errors
    /// - `NotLoaded` when `load` has not succeeded
    /// - `DimensionMismatch` when column count differs from `criteria`
    /// - `MissingDirection` / `MissingWeight` / `InvalidWeight`
    /// - `DegenerateColumn` under `DegenerateColumnPolicy::Reject`
    pub fn rank(
        &self,
        criteria: &[String],
        weights: &WeightVector,
        directions: &HashMap<String, Direction>,
    ) -> Result<RankingResult, RankingError> {
        let matrix = self.matrix.as_ref().ok_or(RankingError::NotLoaded)?;

        if matrix.column_count() != criteria.len() {
            return Err(RankingError::DimensionMismatch {
                axis: MatrixAxis::Columns,
                expected: criteria.len(),
                actual: matrix.column_count(),
            });
        }

        let mut column_weights = Vec::with_capacity(criteria.len());
        let mut column_directions = Vec::with_capacity(criteria.len());
        for criterion in criteria {
            let direction = directions
                .get(criterion)
                .copied()
                .ok_or_else(|| RankingError::MissingDirection(criterion.clone()))?;
            let weight = weights
                .get(criterion)
                .ok_or_else(|| RankingError::MissingWeight(criterion.clone()))?;
            if !weight.is_finite() || weight < 0.0 {
                return Err(RankingError::InvalidWeight {
                    criterion: criterion.clone(),
                    weight,
                });
            }
            column_weights.push(weight);
            column_directions.push(direction);
        }

        let weighted = self.weighted_normalized(matrix, criteria, &column_weights)?;
        let (ideal, anti_ideal) = Self::reference_points(&weighted, &column_directions);

        let entries = self
            .alternatives
            .iter()
            .zip(&weighted)
            .map(|(id, row)| {
                let d_plus = Self::distance(row, &ideal);
                let d_minus = Self::distance(row, &anti_ideal);
                RankedAlternative {
                    alternative_id: id.clone(),
                    closeness: Self::closeness(d_plus, d_minus),
                    distance_to_ideal: d_plus,
                    distance_to_anti_ideal: d_minus,
                }
            })
            .collect();

        let result = RankingResult::from_unsorted(entries);

        debug!(
            alternatives = result.len(),
            criteria = criteria.len(),
            best = result.best().map(|b| b.alternative_id.as_str()).unwrap_or(""),
            "Ranked alternatives"
        );

        Ok(result)
    }

    /// Vector-normalized, weighted matrix.
    fn weighted_normalized(
        &self,
        matrix: &DecisionMatrix,
        criteria: &[String],
        weights: &[f64],
    ) -> Result<Vec<Vec<f64>>, RankingError> {
        let mut weighted = vec![vec![0.0; criteria.len()]; matrix.row_count()];

        for (j, criterion) in criteria.iter().enumerate() {
            let norm = Self::column_norm(matrix, j);

            if norm == 0.0 {
                match self.policy {
                    DegenerateColumnPolicy::Reject => {
                        return Err(RankingError::DegenerateColumn {
                            criterion: criterion.clone(),
                        });
                    }
                    DegenerateColumnPolicy::ZeroContribution => {
                        warn!(
                            criterion = %criterion,
                            "Zero-norm criterion column contributes nothing to the ranking"
                        );
                        continue;
                    }
                }
            }

            for (i, value) in matrix.column(j).enumerate() {
                weighted[i][j] = value / norm * weights[j];
            }
        }

        Ok(weighted)
    }

    /// Euclidean norm of a column, scaled by its largest value so that huge
    /// raw figures do not overflow when squared.
    fn column_norm(matrix: &DecisionMatrix, column: usize) -> f64 {
        let max = matrix.column(column).fold(0.0_f64, f64::max);
        if max == 0.0 {
            return 0.0;
        }
        let scaled: f64 = matrix.column(column).map(|v| (v / max).powi(2)).sum();
        max * scaled.sqrt()
    }

    fn reference_points(weighted: &[Vec<f64>], directions: &[Direction]) -> (Vec<f64>, Vec<f64>) {
        directions
            .iter()
            .enumerate()
            .map(|(j, direction)| {
                let column = weighted.iter().map(|row| row[j]);
                let max = column.clone().fold(f64::NEG_INFINITY, f64::max);
                let min = column.fold(f64::INFINITY, f64::min);
                match direction {
                    Direction::Benefit => (max, min),
                    Direction::Cost => (min, max),
                }
            })
            .unzip()
    }

    fn distance(row: &[f64], point: &[f64]) -> f64 {
        row.iter()
            .zip(point)
            .map(|(v, p)| (v - p).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    fn closeness(d_plus: f64, d_minus: f64) -> f64 {
        let total = d_plus + d_minus;
        if total == 0.0 {
            INDIFFERENT_CLOSENESS
        } else {
            d_minus / total
        }
    }
}
