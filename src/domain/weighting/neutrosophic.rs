//! Neutrosophic triples - truth, indeterminacy and falsity of a judgment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Degrees of truth, indeterminacy and falsity for the statement
/// "criterion a is more important than criterion b".
///
/// Every component is finite and lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTriple", into = "RawTriple")]
pub struct NeutrosophicTriple {
    truth: f64,
    indeterminacy: f64,
    falsity: f64,
}

impl NeutrosophicTriple {
    /// Creates a validated triple.
    pub fn new(truth: f64, indeterminacy: f64, falsity: f64) -> Result<Self, ValidationError> {
        Self::check_component("truth", truth)?;
        Self::check_component("indeterminacy", indeterminacy)?;
        Self::check_component("falsity", falsity)?;

        Ok(Self {
            truth,
            indeterminacy,
            falsity,
        })
    }

    /// Builds a triple from components already known to be in range.
    pub(crate) const fn from_trusted(truth: f64, indeterminacy: f64, falsity: f64) -> Self {
        Self {
            truth,
            indeterminacy,
            falsity,
        }
    }

    fn check_component(field: &str, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range(field, 0.0, 1.0, value));
        }
        Ok(())
    }

    pub fn truth(&self) -> f64 {
        self.truth
    }

    pub fn indeterminacy(&self) -> f64 {
        self.indeterminacy
    }

    pub fn falsity(&self) -> f64 {
        self.falsity
    }

    /// Neutrosophic score `S = T - F`, in `[-1, 1]`.
    ///
    /// Indeterminacy does not enter the score.
    pub fn score(&self) -> f64 {
        self.truth - self.falsity
    }

    /// Pairwise comparison ratio derived from the score.
    ///
    /// `1 + S` when `S >= 0`, otherwise `1 / (1 - S)`. The result lies in
    /// `[0.5, 2]`: above 1 when the first criterion dominates, below 1 when
    /// the judgment is reversed, exactly 1 for a neutral judgment.
    pub fn comparison_ratio(&self) -> f64 {
        let s = self.score();
        if s >= 0.0 {
            1.0 + s
        } else {
            1.0 / (1.0 - s)
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawTriple(f64, f64, f64);

impl TryFrom<RawTriple> for NeutrosophicTriple {
    type Error = ValidationError;

    fn try_from(raw: RawTriple) -> Result<Self, Self::Error> {
        Self::new(raw.0, raw.1, raw.2)
    }
}

impl From<NeutrosophicTriple> for RawTriple {
    fn from(t: NeutrosophicTriple) -> Self {
        RawTriple(t.truth, t.indeterminacy, t.falsity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(t: f64, i: f64, f: f64) -> NeutrosophicTriple {
        NeutrosophicTriple::new(t, i, f).unwrap()
    }

    #[test]
    fn score_is_truth_minus_falsity() {
        let t = triple(0.7, 0.1, 0.2);
        assert!((t.score() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn positive_score_maps_to_one_plus_score() {
        let t = triple(0.8, 0.1, 0.1);
        assert!((t.comparison_ratio() - 1.7).abs() < 1e-12);
    }

    #[test]
    fn negative_score_maps_to_reciprocal() {
        // S = 0.3 - 0.6 = -0.3 -> 1 / 1.3
        let t = triple(0.3, 0.1, 0.6);
        assert!((t.comparison_ratio() - 1.0 / 1.3).abs() < 1e-12);
    }

    #[test]
    fn neutral_judgment_is_equal_importance() {
        let t = triple(0.4, 0.9, 0.4);
        assert_eq!(t.comparison_ratio(), 1.0);
    }

    #[test]
    fn full_falsity_boundary_is_one_half() {
        // T = 0, F = 1 -> S = -1 -> v = 1 / 2
        let t = triple(0.0, 0.0, 1.0);
        assert_eq!(t.score(), -1.0);
        assert_eq!(t.comparison_ratio(), 0.5);
    }

    #[test]
    fn full_truth_boundary_is_two() {
        let t = triple(1.0, 0.0, 0.0);
        assert_eq!(t.comparison_ratio(), 2.0);
    }

    #[test]
    fn ratio_stays_positive_and_bounded_near_boundaries() {
        for &(t, f) in &[(1e-12, 1.0), (0.0, 1.0 - 1e-12), (1.0, 1e-12), (1.0 - 1e-12, 0.0)] {
            let v = triple(t, 0.5, f).comparison_ratio();
            assert!(v.is_finite());
            assert!((0.5..=2.0).contains(&v), "ratio {} out of bounds", v);
        }
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        assert!(NeutrosophicTriple::new(1.1, 0.0, 0.0).is_err());
        assert!(NeutrosophicTriple::new(0.0, -0.1, 0.0).is_err());
        assert!(NeutrosophicTriple::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn deserializes_from_tuple_and_validates() {
        let t: NeutrosophicTriple = serde_json::from_str("[0.3, 0.1, 0.6]").unwrap();
        assert_eq!(t.truth(), 0.3);
        assert_eq!(t.falsity(), 0.6);

        let bad: Result<NeutrosophicTriple, _> = serde_json::from_str("[0.3, 0.1, 1.6]");
        assert!(bad.is_err());
    }
}
