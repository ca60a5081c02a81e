//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Ranking handlers
    RankForwardersCommand, RankForwardersError, RankForwardersHandler, RankForwardersResult,
    RankingSettings, SnapshotDecisionCommand, SnapshotDecisionHandler, SnapshotDecisionResult,
    // Feedback handlers
    FeedbackError, FeedbackTracker, RecordOutcomeCommand, RecordOutcomeResult,
};
