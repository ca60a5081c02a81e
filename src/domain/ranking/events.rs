//! Ranking domain events.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{domain_event, EventId, RankingRunId, SnapshotId, Timestamp};

/// A forwarder's score as carried in events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAlternative {
    pub alternative_id: String,
    pub closeness: f64,
}

/// Published after a ranking run finishes, whether or not it validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingCompleted {
    /// Unique event identifier for deduplication.
    pub event_id: EventId,
    /// The run this event describes.
    pub run_id: RankingRunId,
    /// Alternatives in ranked order.
    pub ranking: Vec<ScoredAlternative>,
    /// Criterion weights used for the run.
    pub weights: BTreeMap<String, f64>,
    /// Consistency ratio of the pairwise judgments.
    pub consistency_ratio: f64,
    /// Whether matrix, weights and scores passed validation.
    pub validated: bool,
    /// Audit snapshot written for the run, if any.
    pub snapshot_id: Option<SnapshotId>,
    /// When the run completed.
    pub completed_at: Timestamp,
}

domain_event!(
    RankingCompleted,
    event_type = "ranking.completed.v1",
    schema_version = 1,
    aggregate_id = run_id,
    aggregate_type = "Ranking",
    occurred_at = completed_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SerializableDomainEvent;

    #[test]
    fn ranking_completed_envelope_is_keyed_by_run() {
        let run_id = RankingRunId::new();
        let event = RankingCompleted {
            event_id: EventId::new(),
            run_id,
            ranking: vec![ScoredAlternative {
                alternative_id: "C".to_string(),
                closeness: 0.8,
            }],
            weights: BTreeMap::from([("Cost".to_string(), 1.0)]),
            consistency_ratio: 0.0,
            validated: true,
            snapshot_id: None,
            completed_at: Timestamp::now(),
        };

        let envelope = event.to_envelope();

        assert_eq!(envelope.event_type, "ranking.completed.v1");
        assert_eq!(envelope.aggregate_type, "Ranking");
        assert_eq!(envelope.aggregate_id, run_id.to_string());
        assert_eq!(envelope.payload["ranking"][0]["alternative_id"], "C");
    }
}
