//! File-based Snapshot Store Adapter
//!
//! Writes each audit snapshot as a pretty-printed JSON file named
//! `decision_snapshot_<stamp>_<seq>_<uuid>.json`. The bytes go to a
//! uniquely named temp file first and are renamed into place, so a reader
//! listing the directory never sees a partial snapshot.
//!
//! Each id is claimed by creating `.claim_<uuid>` with `create_new`, so two
//! saves of the same snapshot race on a single filesystem call instead of a
//! directory scan.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::foundation::SnapshotId;
use crate::domain::validation::{AuditSnapshot, SNAPSHOT_FILE_PREFIX};
use crate::ports::{SnapshotStore, SnapshotStoreError};

const SNAPSHOT_EXTENSION: &str = ".json";
const TEMP_EXTENSION: &str = ".tmp";
const CLAIM_PREFIX: &str = ".claim_";

/// File-based storage for audit snapshots
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    base_path: PathBuf,
    sequence: Arc<AtomicU64>,
}

impl FileSnapshotStore {
    /// Create a new snapshot store rooted at `base_path`
    ///
    /// The directory is created on first save.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSnapshotStore::new("./data/snapshots");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    async fn ensure_dir(&self) -> Result<(), SnapshotStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))
    }

    fn claim_path(&self, id: SnapshotId) -> PathBuf {
        self.base_path.join(format!("{}{}", CLAIM_PREFIX, id))
    }

    /// Reserves `id` for this store. Fails with `AlreadyExists` if any save
    /// of the same id got there first.
    async fn claim(&self, id: SnapshotId) -> Result<PathBuf, SnapshotStoreError> {
        let path = self.claim_path(id);
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(_) => Ok(path),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(SnapshotStoreError::AlreadyExists(id))
            }
            Err(e) => Err(SnapshotStoreError::IoError(e.to_string())),
        }
    }

    /// Writes the snapshot bytes to a temp file and renames it into place.
    async fn write_snapshot(&self, snapshot: &AuditSnapshot) -> Result<PathBuf, SnapshotStoreError> {
        let json = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| SnapshotStoreError::SerializationFailed(e.to_string()))?;

        let file_name = snapshot.file_name(self.next_sequence());
        let final_path = self.base_path.join(&file_name);
        // Leading dot and .tmp keep the temp file out of `snapshot_files`.
        let temp_path = self
            .base_path
            .join(format!(".{}{}", file_name, TEMP_EXTENSION));

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        let written: std::io::Result<()> = async {
            file.write_all(&json).await?;
            file.sync_all().await
        }
        .await;
        drop(file);

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path).await;
            return Err(SnapshotStoreError::IoError(e.to_string()));
        }

        if let Err(e) = fs::rename(&temp_path, &final_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(SnapshotStoreError::IoError(e.to_string()));
        }

        Ok(final_path)
    }

    /// Snapshot file names in the directory, sorted (oldest stamp first).
    async fn snapshot_files(&self) -> Result<Vec<String>, SnapshotStoreError> {
        if !fs::try_exists(&self.base_path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?
        {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?
        {
            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with(SNAPSHOT_FILE_PREFIX) && name.ends_with(SNAPSHOT_EXTENSION) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    async fn find_file(&self, id: SnapshotId) -> Result<Option<PathBuf>, SnapshotStoreError> {
        let suffix = format!("_{}{}", id, SNAPSHOT_EXTENSION);
        Ok(self
            .snapshot_files()
            .await?
            .into_iter()
            .find(|name| name.ends_with(&suffix))
            .map(|name| self.base_path.join(name)))
    }
}

/// Extracts the snapshot id from `decision_snapshot_<stamp>_<seq>_<uuid>.json`.
fn id_from_file_name(name: &str) -> Option<SnapshotId> {
    name.strip_suffix(SNAPSHOT_EXTENSION)?
        .rsplit('_')
        .next()?
        .parse()
        .ok()
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn save(&self, snapshot: &AuditSnapshot) -> Result<String, SnapshotStoreError> {
        self.ensure_dir().await?;

        let claim = self.claim(snapshot.snapshot_id).await?;

        match self.write_snapshot(snapshot).await {
            Ok(path) => Ok(path.display().to_string()),
            Err(e) => {
                // Nothing landed, so the id may be saved again.
                let _ = fs::remove_file(&claim).await;
                Err(e)
            }
        }
    }

    async fn load(&self, id: SnapshotId) -> Result<AuditSnapshot, SnapshotStoreError> {
        let path = self
            .find_file(id)
            .await?
            .ok_or(SnapshotStoreError::NotFound(id))?;

        let json = fs::read(&path)
            .await
            .map_err(|e| SnapshotStoreError::IoError(e.to_string()))?;

        serde_json::from_slice(&json)
            .map_err(|e| SnapshotStoreError::DeserializationFailed(e.to_string()))
    }

    async fn list(&self) -> Result<Vec<SnapshotId>, SnapshotStoreError> {
        Ok(self
            .snapshot_files()
            .await?
            .iter()
            .filter_map(|name| id_from_file_name(name))
            .collect())
    }
}
