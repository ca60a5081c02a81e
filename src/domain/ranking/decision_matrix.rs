//! Decision Matrix - raw performance of each alternative on each criterion.

use serde::{Deserialize, Serialize};

use super::RankingError;

/// `m` alternatives by `n` criteria of non-negative, finite values.
///
/// Rows follow the order of the alternative identifiers they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a matrix, checking shape and values.
    ///
    /// # Errors
    /// `MalformedMatrix` when the matrix is empty, has empty or ragged rows,
    /// or holds a negative or non-finite value.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, RankingError> {
        let width = match rows.first() {
            None => return Err(RankingError::malformed("matrix has no rows")),
            Some(first) if first.is_empty() => {
                return Err(RankingError::malformed("matrix has no columns"))
            }
            Some(first) => first.len(),
        };

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(RankingError::malformed(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(RankingError::malformed(format!(
                        "value {} at row {}, column {} is not a finite non-negative number",
                        value, i, j
                    )));
                }
            }
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of alternatives.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of criteria.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Values of one column, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |row| row.get(column).copied())
    }
}

impl TryFrom<Vec<Vec<f64>>> for DecisionMatrix {
    type Error = RankingError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<DecisionMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DecisionMatrix) -> Self {
        matrix.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_rectangular_matrix() {
        let m = DecisionMatrix::new(vec![vec![1200.0, 92.0, 5.0], vec![1000.0, 85.0, 9.0]]).unwrap();
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.column_count(), 3);
        assert_eq!(m.column(1).collect::<Vec<_>>(), vec![92.0, 85.0]);
    }

    #[test]
    fn rejects_empty_matrix() {
        assert!(matches!(
            DecisionMatrix::new(vec![]),
            Err(RankingError::MalformedMatrix(_))
        ));
        assert!(matches!(
            DecisionMatrix::new(vec![vec![]]),
            Err(RankingError::MalformedMatrix(_))
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = DecisionMatrix::new(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            RankingError::MalformedMatrix("row 1 has 1 values, expected 2".to_string())
        );
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        assert!(DecisionMatrix::new(vec![vec![1.0, -2.0]]).is_err());
        assert!(DecisionMatrix::new(vec![vec![1.0, f64::INFINITY]]).is_err());
        assert!(DecisionMatrix::new(vec![vec![f64::NAN, 1.0]]).is_err());
    }

    #[test]
    fn deserialization_validates_shape() {
        let ok: DecisionMatrix = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(ok.get(1, 0), Some(3.0));

        let ragged: Result<DecisionMatrix, _> = serde_json::from_str("[[1, 2], [3]]");
        assert!(ragged.is_err());
    }
}
