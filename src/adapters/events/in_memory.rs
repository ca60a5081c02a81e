//! In-memory event bus implementation for testing.
//!
//! Captures every published envelope so tests can assert on what the
//! application layer emitted.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus for testing.
///
/// Features:
/// - Synchronous capture (deterministic for tests)
/// - Filtering helpers for assertions
/// - A failing mode to exercise publish error paths
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
///
/// bus.publish(envelope).await?;
///
/// assert_eq!(bus.events_of_type("ranking.completed.v1").len(), 1);
/// ```
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
    fail_publishes: AtomicBool,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self {
            published: RwLock::new(Vec::new()),
            fail_publishes: AtomicBool::new(false),
        }
    }

    /// Creates a bus that rejects every publish.
    pub fn failing() -> Self {
        let bus = Self::new();
        bus.set_failing(true);
        bus
    }

    /// Toggles whether publishes are rejected.
    pub fn set_failing(&self, failing: bool) {
        self.fail_publishes.store(failing, Ordering::SeqCst);
    }

    // === Test Helpers ===

    /// Returns all published events (for test assertions).
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    /// Returns count of published events.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.fail_publishes.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::EventPublishFailed,
                format!("InMemoryEventBus rejected {}", event.event_type),
            ));
        }

        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
