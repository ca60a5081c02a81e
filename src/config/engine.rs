//! Ranking engine configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::feedback::{DegradationPolicy, DEFAULT_FAILURE_THRESHOLD};
use crate::domain::ranking::DegenerateColumnPolicy;
use crate::domain::validation::DEFAULT_ENGINE_VERSION;

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Directory audit snapshots are written to
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,

    /// Reject rankings that fail validation instead of returning them
    #[serde(default)]
    pub strict_mode: bool,

    /// Version string recorded in every audit snapshot
    #[serde(default = "default_engine_version")]
    pub engine_version: String,

    /// How a criterion whose values are all zero is treated
    #[serde(default)]
    pub degenerate_column_policy: DegenerateColumnPolicy,

    /// Failures a forwarder may accumulate before it is flagged degraded
    #[serde(default = "default_failure_threshold")]
    pub degradation_failure_threshold: usize,
}

impl EngineConfig {
    pub fn degradation_policy(&self) -> DegradationPolicy {
        DegradationPolicy::new(self.degradation_failure_threshold)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.snapshot_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("engine.snapshot_dir"));
        }
        if self.engine_version.trim().is_empty() {
            return Err(ValidationError::BlankEngineVersion);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: default_snapshot_dir(),
            strict_mode: false,
            engine_version: default_engine_version(),
            degenerate_column_policy: DegenerateColumnPolicy::default(),
            degradation_failure_threshold: default_failure_threshold(),
        }
    }
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("./data/snapshots")
}

fn default_engine_version() -> String {
    DEFAULT_ENGINE_VERSION.to_string()
}

fn default_failure_threshold() -> usize {
    DEFAULT_FAILURE_THRESHOLD
}
