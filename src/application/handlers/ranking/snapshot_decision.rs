//! SnapshotDecisionHandler - Persists the audit record of a ranking run.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::{AlternativeId, SnapshotId};
use crate::domain::validation::AuditSnapshot;
use crate::ports::{SnapshotStore, SnapshotStoreError};

/// Command to write one audit snapshot.
///
/// `matrix[i]` and `scores[i]` must belong to `forwarders[i]`;
/// `ranked_forwarders` is the same set, best first.
#[derive(Debug, Clone)]
pub struct SnapshotDecisionCommand {
    pub matrix: Vec<Vec<f64>>,
    pub weights: BTreeMap<String, f64>,
    pub scores: Vec<f64>,
    pub forwarders: Vec<AlternativeId>,
    pub ranked_forwarders: Vec<AlternativeId>,
    pub metadata: Map<String, Value>,
}

/// Where a snapshot ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotDecisionResult {
    pub snapshot_id: SnapshotId,
    pub location: String,
    pub dataset_hash: String,
}

/// Handler for writing audit snapshots.
pub struct SnapshotDecisionHandler {
    store: Arc<dyn SnapshotStore>,
    engine_version: String,
}

impl SnapshotDecisionHandler {
    pub fn new(store: Arc<dyn SnapshotStore>, engine_version: impl Into<String>) -> Self {
        Self {
            store,
            engine_version: engine_version.into(),
        }
    }

    pub fn engine_version(&self) -> &str {
        &self.engine_version
    }

    pub async fn handle(
        &self,
        cmd: SnapshotDecisionCommand,
    ) -> Result<SnapshotDecisionResult, SnapshotStoreError> {
        let snapshot = AuditSnapshot::capture(
            cmd.matrix,
            cmd.weights,
            cmd.scores,
            cmd.forwarders,
            self.engine_version.clone(),
            cmd.metadata,
        )
        .with_ranked_forwarders(cmd.ranked_forwarders);

        let location = self.store.save(&snapshot).await?;

        tracing::info!(
            snapshot_id = %snapshot.snapshot_id,
            location = %location,
            dataset_hash = %snapshot.dataset_hash,
            "Audit snapshot written"
        );

        Ok(SnapshotDecisionResult {
            snapshot_id: snapshot.snapshot_id,
            location,
            dataset_hash: snapshot.dataset_hash,
        })
    }
}
