//! Weighting Module - Neutrosophic AHP criterion weighting.
//!
//! # Components
//!
//! - `NeutrosophicTriple` - Truth/indeterminacy/falsity of a pairwise judgment
//! - `PairwiseJudgments` - Ordered judgments between criteria
//! - `ComparisonMatrix` - Reciprocal comparison matrix and consistency
//! - `CriteriaWeighting` - Judgments to normalized `WeightVector`
//!
//! All functions are pure and stateless.

mod comparison_matrix;
mod criteria_weighting;
mod criterion;
mod errors;
mod judgments;
mod neutrosophic;
mod weight_vector;

pub use comparison_matrix::{
    ComparisonMatrix, Consistency, CONSISTENCY_THRESHOLD, EQUAL_IMPORTANCE, RANDOM_INDEX,
    RANDOM_INDEX_FALLBACK,
};
pub use criteria_weighting::{CriteriaWeighting, WeightDerivation};
pub use criterion::{Criterion, Direction};
pub use errors::WeightingError;
pub use judgments::{PairwiseJudgment, PairwiseJudgments};
pub use neutrosophic::NeutrosophicTriple;
pub use weight_vector::WeightVector;
