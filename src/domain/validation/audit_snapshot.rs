//! AuditSnapshot - write-once record of a validated ranking run.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::domain::foundation::{AlternativeId, SnapshotId, Timestamp};

/// Engine version recorded when configuration does not override it.
pub const DEFAULT_ENGINE_VERSION: &str = "v1.0.0";

/// Prefix shared by every snapshot file name.
pub const SNAPSHOT_FILE_PREFIX: &str = "decision_snapshot";

/// Everything needed to reproduce and audit one ranking decision.
///
/// `matrix[i]` and `scores[i]` belong to `forwarders[i]`, all in the order the
/// forwarders were submitted. `ranked_forwarders` holds the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSnapshot {
    pub snapshot_id: SnapshotId,
    pub timestamp: Timestamp,
    pub matrix: Vec<Vec<f64>>,
    pub weights: BTreeMap<String, f64>,
    pub scores: Vec<f64>,
    pub forwarders: Vec<AlternativeId>,
    #[serde(default)]
    pub ranked_forwarders: Vec<AlternativeId>,
    pub engine_version: String,
    pub dataset_hash: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl AuditSnapshot {
    /// Captures a snapshot stamped with the current time and a fresh id.
    pub fn capture(
        matrix: Vec<Vec<f64>>,
        weights: BTreeMap<String, f64>,
        scores: Vec<f64>,
        forwarders: Vec<AlternativeId>,
        engine_version: impl Into<String>,
        metadata: Map<String, Value>,
    ) -> Self {
        let dataset_hash = dataset_hash(&matrix);
        Self {
            snapshot_id: SnapshotId::new(),
            timestamp: Timestamp::now(),
            matrix,
            weights,
            scores,
            forwarders,
            ranked_forwarders: Vec::new(),
            engine_version: engine_version.into(),
            dataset_hash,
            metadata,
        }
    }

    /// Records the forwarders in ranked order, best first.
    pub fn with_ranked_forwarders(mut self, ranked: Vec<AlternativeId>) -> Self {
        self.ranked_forwarders = ranked;
        self
    }

    /// Row and score of a forwarder, if it was part of the run.
    pub fn entry_for(&self, forwarder: &str) -> Option<(&[f64], f64)> {
        let index = self.forwarders.iter().position(|f| f.as_str() == forwarder)?;
        let row = self.matrix.get(index)?;
        let score = self.scores.get(index)?;
        Some((row.as_slice(), *score))
    }

    /// Collision-free file name: `decision_snapshot_<stamp>_<seq>_<uuid>.json`.
    pub fn file_name(&self, sequence: u64) -> String {
        format!(
            "{}_{}_{}_{}.json",
            SNAPSHOT_FILE_PREFIX,
            self.timestamp.file_stamp(),
            sequence,
            self.snapshot_id
        )
    }
}

/// SHA-256 over the canonical JSON encoding of the matrix, hex encoded.
pub fn dataset_hash(matrix: &[Vec<f64>]) -> String {
    let canonical = serde_json::to_vec(matrix).unwrap_or_default();
    format!("{:x}", Sha256::digest(&canonical))
}
