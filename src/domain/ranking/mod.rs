//! Ranking Module - TOPSIS ranking of alternatives.
//!
//! # Components
//!
//! - `DecisionMatrix` - Validated alternatives x criteria performance table
//! - `AlternativeRanking` - TOPSIS closeness scoring with a zero-norm policy
//! - `RankingResult` - Stable, descending ranking
//! - `RankingExplanation` - Plain-language summary of the winner
//! - `DecisionModel` - Criteria and judgments, including the freight default

mod alternative_ranking;
mod decision_matrix;
mod decision_model;
mod errors;
mod events;
mod explanation;
mod ranking_result;

pub use alternative_ranking::{AlternativeRanking, DegenerateColumnPolicy, INDIFFERENT_CLOSENESS};
pub use decision_matrix::DecisionMatrix;
pub use decision_model::DecisionModel;
pub use errors::{MatrixAxis, RankingError};
pub use events::{RankingCompleted, ScoredAlternative};
pub use explanation::RankingExplanation;
pub use ranking_result::{RankedAlternative, RankingResult};
