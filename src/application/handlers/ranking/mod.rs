//! Ranking command handlers.

mod rank_forwarders;
mod snapshot_decision;

pub use rank_forwarders::{
    RankForwardersCommand, RankForwardersError, RankForwardersHandler, RankForwardersResult,
    RankingSettings,
};
pub use snapshot_decision::{SnapshotDecisionCommand, SnapshotDecisionHandler, SnapshotDecisionResult};
