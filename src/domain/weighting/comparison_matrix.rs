//! Reciprocal pairwise comparison matrix and its consistency.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::{PairwiseJudgments, WeightingError};

/// Value used for every criterion pair that has no explicit judgment.
///
/// Missing judgments are read as "equally important". This dilutes a
/// criterion whose real importance was never stated, so callers that care
/// should supply a judgment for every pair.
pub const EQUAL_IMPORTANCE: f64 = 1.0;

/// Saaty's random consistency index for matrices of size 1..=10.
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Random index used beyond the tabulated sizes.
pub const RANDOM_INDEX_FALLBACK: f64 = 1.5;

/// Consistency ratio below which judgments are considered acceptable.
pub const CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Square comparison matrix over an ordered list of criteria.
///
/// Invariants: `values[i][i] == 1` and `values[j][i] == 1 / values[i][j]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMatrix {
    criteria: Vec<String>,
    values: Vec<Vec<f64>>,
}

/// Consistency diagnostics of a comparison matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Consistency {
    /// Principal eigenvalue estimate.
    pub lambda_max: f64,
    /// `(lambda_max - n) / (n - 1)`.
    pub index: f64,
    /// `index / random_index`; zero for matrices of size two or less.
    pub ratio: f64,
}

impl Consistency {
    /// Returns true when the ratio is under [`CONSISTENCY_THRESHOLD`].
    pub fn is_acceptable(&self) -> bool {
        self.ratio < CONSISTENCY_THRESHOLD
    }
}

impl ComparisonMatrix {
    /// Builds the matrix from judgments.
    ///
    /// # Errors
    /// - `NoCriteria` for an empty criteria list
    /// - `DuplicateCriterion` when a name repeats
    /// - `UnknownCriterion` when a judgment names an undeclared criterion
    /// - `SelfComparison` for a judgment of a criterion against itself
    pub fn from_judgments(
        criteria: &[String],
        judgments: &PairwiseJudgments,
    ) -> Result<Self, WeightingError> {
        if criteria.is_empty() {
            return Err(WeightingError::NoCriteria);
        }

        let mut seen = HashSet::new();
        for name in criteria {
            if !seen.insert(name.as_str()) {
                return Err(WeightingError::DuplicateCriterion(name.clone()));
            }
        }

        let index: HashMap<&str, usize> = criteria
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        let n = criteria.len();
        let mut values = vec![vec![EQUAL_IMPORTANCE; n]; n];

        for judgment in judgments.iter() {
            let i = *index
                .get(judgment.preferred.as_str())
                .ok_or_else(|| WeightingError::UnknownCriterion(judgment.preferred.clone()))?;
            let j = *index
                .get(judgment.other.as_str())
                .ok_or_else(|| WeightingError::UnknownCriterion(judgment.other.clone()))?;

            if i == j {
                return Err(WeightingError::SelfComparison(judgment.preferred.clone()));
            }

            let v = judgment.triple.comparison_ratio();
            values[i][j] = v;
            values[j][i] = 1.0 / v;
        }

        Ok(Self {
            criteria: criteria.to_vec(),
            values,
        })
    }

    /// Number of criteria.
    pub fn size(&self) -> usize {
        self.criteria.len()
    }

    /// Criteria in row/column order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Entry for a pair of criterion names.
    pub fn value(&self, row: &str, column: &str) -> Option<f64> {
        let i = self.criteria.iter().position(|c| c == row)?;
        let j = self.criteria.iter().position(|c| c == column)?;
        self.get(i, j)
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Sum of every column.
    pub fn column_sums(&self) -> Vec<f64> {
        let n = self.size();
        (0..n)
            .map(|j| self.values.iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Matrix with each column divided by its sum.
    ///
    /// All entries are strictly positive, so column sums never vanish.
    pub fn column_normalized(&self) -> Vec<Vec<f64>> {
        let sums = self.column_sums();
        self.values
            .iter()
            .map(|row| row.iter().zip(&sums).map(|(v, s)| v / s).collect())
            .collect()
    }

    /// Priority vector: mean of each row of the column-normalized matrix.
    pub fn priority_vector(&self) -> Vec<f64> {
        let n = self.size() as f64;
        self.column_normalized()
            .iter()
            .map(|row| row.iter().sum::<f64>() / n)
            .collect()
    }

    /// Saaty consistency diagnostics for the given priority vector.
    pub fn consistency(&self, priorities: &[f64]) -> Consistency {
        let n = self.size();

        let lambda_max = self
            .values
            .iter()
            .zip(priorities)
            .map(|(row, w_i)| {
                let weighted: f64 = row.iter().zip(priorities).map(|(a, w)| a * w).sum();
                weighted / w_i
            })
            .sum::<f64>()
            / n as f64;

        if n <= 2 {
            return Consistency {
                lambda_max,
                index: 0.0,
                ratio: 0.0,
            };
        }

        let index = (lambda_max - n as f64) / (n as f64 - 1.0);
        let random_index = RANDOM_INDEX
            .get(n - 1)
            .copied()
            .unwrap_or(RANDOM_INDEX_FALLBACK);

        Consistency {
            lambda_max,
            index,
            ratio: index / random_index,
        }
    }
}
