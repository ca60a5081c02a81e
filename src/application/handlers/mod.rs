//! Application handlers.
//!
//! Command handlers that orchestrate domain operations across ports.

pub mod feedback;
pub mod ranking;

pub use feedback::{FeedbackError, FeedbackTracker, RecordOutcomeCommand, RecordOutcomeResult};
pub use ranking::{
    RankForwardersCommand, RankForwardersError, RankForwardersHandler, RankForwardersResult,
    RankingSettings, SnapshotDecisionCommand, SnapshotDecisionHandler, SnapshotDecisionResult,
};
