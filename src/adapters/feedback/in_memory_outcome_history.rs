//! In-Memory Outcome History Adapter
//!
//! A map-level `RwLock` guards the set of known forwarders; each forwarder's
//! history sits behind its own async `Mutex`. Appends for one forwarder are
//! serialized while different forwarders proceed in parallel.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::feedback::{Outcome, OutcomeTally};
use crate::domain::foundation::AlternativeId;
use crate::ports::{OutcomeHistoryError, OutcomeHistoryStore};

type History = Arc<Mutex<Vec<Outcome>>>;

/// In-memory, append-only outcome history
#[derive(Debug, Clone, Default)]
pub struct InMemoryOutcomeHistory {
    histories: Arc<RwLock<HashMap<AlternativeId, History>>>,
}

impl InMemoryOutcomeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of forwarders with at least one recorded outcome
    pub async fn alternative_count(&self) -> usize {
        self.histories.read().await.len()
    }

    async fn existing(&self, alternative_id: &AlternativeId) -> Option<History> {
        self.histories.read().await.get(alternative_id).cloned()
    }

    async fn entry(&self, alternative_id: &AlternativeId) -> History {
        if let Some(history) = self.existing(alternative_id).await {
            return history;
        }
        let mut histories = self.histories.write().await;
        histories
            .entry(alternative_id.clone())
            .or_default()
            .clone()
    }
}

#[async_trait]
impl OutcomeHistoryStore for InMemoryOutcomeHistory {
    async fn append(
        &self,
        alternative_id: &AlternativeId,
        outcome: Outcome,
    ) -> Result<OutcomeTally, OutcomeHistoryError> {
        let history = self.entry(alternative_id).await;
        let mut outcomes = history.lock().await;
        outcomes.push(outcome);
        Ok(OutcomeTally::of(&outcomes))
    }

    async fn history(&self, alternative_id: &AlternativeId) -> Result<Vec<Outcome>, OutcomeHistoryError> {
        match self.existing(alternative_id).await {
            Some(history) => Ok(history.lock().await.clone()),
            None => Ok(Vec::new()),
        }
    }
}
