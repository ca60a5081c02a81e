//! Outcome History Store Port - Append-only delivery outcome history.
//!
//! Appends for the same alternative are serialized. Appends for different
//! alternatives may proceed concurrently.

use async_trait::async_trait;

use crate::domain::feedback::{Outcome, OutcomeTally};
use crate::domain::foundation::{AlternativeId, DomainError, ErrorCode};

/// Errors that can occur while recording or reading outcome history
#[derive(Debug, thiserror::Error)]
pub enum OutcomeHistoryError {
    #[error("Outcome history unavailable: {0}")]
    Unavailable(String),
}

impl From<OutcomeHistoryError> for DomainError {
    fn from(err: OutcomeHistoryError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for the per-alternative outcome history
#[async_trait]
pub trait OutcomeHistoryStore: Send + Sync {
    /// Append an outcome and return the tally including it.
    ///
    /// The tally is computed while the alternative's history is exclusively
    /// held, so no two appends ever observe the same tally.
    async fn append(
        &self,
        alternative_id: &AlternativeId,
        outcome: Outcome,
    ) -> Result<OutcomeTally, OutcomeHistoryError>;

    /// Full history for an alternative, oldest first. Empty if unknown.
    async fn history(&self, alternative_id: &AlternativeId) -> Result<Vec<Outcome>, OutcomeHistoryError>;

    /// Current tally for an alternative.
    async fn tally(&self, alternative_id: &AlternativeId) -> Result<OutcomeTally, OutcomeHistoryError> {
        Ok(OutcomeTally::of(&self.history(alternative_id).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn OutcomeHistoryStore) {}

    #[test]
    fn unavailable_converts_to_storage_error() {
        let err: DomainError = OutcomeHistoryError::Unavailable("closed".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
