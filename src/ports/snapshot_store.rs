//! Snapshot Store Port - Interface for persisting audit snapshots.
//!
//! Snapshots are write-once: a store never overwrites an existing record and
//! readers never observe a partially written one.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SnapshotId};
use crate::domain::validation::AuditSnapshot;

/// Errors that can occur during snapshot storage operations
#[derive(Debug, thiserror::Error)]
pub enum SnapshotStoreError {
    #[error("Snapshot not found: {0}")]
    NotFound(SnapshotId),

    #[error("Snapshot already exists: {0}")]
    AlreadyExists(SnapshotId),

    #[error("Failed to serialize snapshot: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize snapshot: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<SnapshotStoreError> for DomainError {
    fn from(err: SnapshotStoreError) -> Self {
        let domain = DomainError::new(ErrorCode::StorageError, err.to_string());
        match err {
            SnapshotStoreError::NotFound(id) | SnapshotStoreError::AlreadyExists(id) => {
                domain.with_detail("snapshot_id", id.to_string())
            }
            _ => domain,
        }
    }
}

/// Port for persisting and loading audit snapshots
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persist a snapshot at a collision-free location.
    ///
    /// # Returns
    /// A human-readable location (path or key) for logging.
    ///
    /// # Errors
    /// Returns `SnapshotStoreError::AlreadyExists` if the id was stored before.
    async fn save(&self, snapshot: &AuditSnapshot) -> Result<String, SnapshotStoreError>;

    /// Load a snapshot by id.
    ///
    /// # Errors
    /// Returns `SnapshotStoreError::NotFound` if no snapshot has this id.
    async fn load(&self, id: SnapshotId) -> Result<AuditSnapshot, SnapshotStoreError>;

    /// Ids of every stored snapshot, oldest first.
    async fn list(&self) -> Result<Vec<SnapshotId>, SnapshotStoreError>;
}
