//! In-Memory Snapshot Store Adapter
//!
//! Keeps audit snapshots in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SnapshotId;
use crate::domain::validation::AuditSnapshot;
use crate::ports::{SnapshotStore, SnapshotStoreError};

/// In-memory storage for audit snapshots
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    snapshots: Arc<RwLock<Vec<AuditSnapshot>>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored snapshots
    pub async fn snapshot_count(&self) -> usize {
        self.snapshots.read().await.len()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(&self, snapshot: &AuditSnapshot) -> Result<String, SnapshotStoreError> {
        let mut snapshots = self.snapshots.write().await;
        if snapshots.iter().any(|s| s.snapshot_id == snapshot.snapshot_id) {
            return Err(SnapshotStoreError::AlreadyExists(snapshot.snapshot_id));
        }
        let location = format!("memory://{}", snapshot.file_name(snapshots.len() as u64));
        snapshots.push(snapshot.clone());
        Ok(location)
    }

    async fn load(&self, id: SnapshotId) -> Result<AuditSnapshot, SnapshotStoreError> {
        self.snapshots
            .read()
            .await
            .iter()
            .find(|s| s.snapshot_id == id)
            .cloned()
            .ok_or(SnapshotStoreError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<SnapshotId>, SnapshotStoreError> {
        Ok(self
            .snapshots
            .read()
            .await
            .iter()
            .map(|s| s.snapshot_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AlternativeId;
    use serde_json::Map;
    use std::collections::BTreeMap;

    fn test_snapshot() -> AuditSnapshot {
        AuditSnapshot::capture(
            vec![vec![1.0, 2.0]],
            BTreeMap::from([("Cost".to_string(), 1.0)]),
            vec![0.5],
            vec![AlternativeId::new("A").unwrap()],
            "v1.0.0",
            Map::new(),
        )
    }

    #[tokio::test]
    async fn save_then_load() {
        let store = InMemorySnapshotStore::new();
        let snapshot = test_snapshot();

        let location = store.save(&snapshot).await.unwrap();

        assert!(location.starts_with("memory://decision_snapshot_"));
        assert_eq!(store.load(snapshot.snapshot_id).await.unwrap(), snapshot);
        assert_eq!(store.snapshot_count().await, 1);
    }

    #[tokio::test]
    async fn duplicate_save_is_rejected() {
        let store = InMemorySnapshotStore::new();
        let snapshot = test_snapshot();

        store.save(&snapshot).await.unwrap();

        assert!(matches!(
            store.save(&snapshot).await,
            Err(SnapshotStoreError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn list_preserves_save_order() {
        let store = InMemorySnapshotStore::new();
        let first = test_snapshot();
        let second = test_snapshot();

        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();

        assert_eq!(
            store.list().await.unwrap(),
            vec![first.snapshot_id, second.snapshot_id]
        );
    }

    #[tokio::test]
    async fn load_unknown_is_not_found() {
        let store = InMemorySnapshotStore::new();
        assert!(matches!(
            store.load(SnapshotId::new()).await,
            Err(SnapshotStoreError::NotFound(_))
        ));
    }
}
