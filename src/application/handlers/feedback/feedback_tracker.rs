//! FeedbackTracker - Records delivery outcomes and flags degraded forwarders.
//!
//! The tally that decides degradation comes back from the history store's
//! append, computed under that forwarder's lock. Only one append can observe
//! the crossing, so the signal fires exactly once per forwarder.
//!
//! Because the crossing cannot be observed again, a failed publish hands the
//! event back in `FeedbackError::DegradationUnpublished`. The outcome is
//! already recorded at that point; the caller retries with
//! `FeedbackTracker::republish`.

use std::sync::Arc;

use crate::domain::feedback::{AlternativeDegraded, DegradationPolicy, Outcome, OutcomeTally};
use crate::domain::foundation::{AlternativeId, DomainError, EventId, SerializableDomainEvent, Timestamp};
use crate::ports::{EventPublisher, OutcomeHistoryError, OutcomeHistoryStore};

/// Command to record one delivery outcome.
#[derive(Debug, Clone)]
pub struct RecordOutcomeCommand {
    pub alternative_id: AlternativeId,
    pub outcome: Outcome,
}

/// Result of recording an outcome.
#[derive(Debug, Clone)]
pub struct RecordOutcomeResult {
    pub tally: OutcomeTally,
    /// Whether the forwarder is past the failure threshold.
    pub degraded: bool,
    /// Present only on the append that crossed the threshold.
    pub event: Option<AlternativeDegraded>,
}

/// Errors from recording an outcome.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error(transparent)]
    History(#[from] OutcomeHistoryError),

    /// The outcome was recorded and crossed the threshold, but the event
    /// could not be published. It will not be raised again on its own.
    #[error("Degradation of {} recorded but not published: {source}", .event.alternative_id)]
    DegradationUnpublished {
        event: AlternativeDegraded,
        source: DomainError,
    },
}

/// Records outcomes per forwarder and publishes `AlternativeDegraded`.
pub struct FeedbackTracker {
    history: Arc<dyn OutcomeHistoryStore>,
    event_publisher: Arc<dyn EventPublisher>,
    policy: DegradationPolicy,
}

impl FeedbackTracker {
    pub fn new(
        history: Arc<dyn OutcomeHistoryStore>,
        event_publisher: Arc<dyn EventPublisher>,
        policy: DegradationPolicy,
    ) -> Self {
        Self {
            history,
            event_publisher,
            policy,
        }
    }

    pub fn policy(&self) -> DegradationPolicy {
        self.policy
    }

    /// Appends an outcome to the forwarder's history.
    pub async fn record(&self, cmd: RecordOutcomeCommand) -> Result<RecordOutcomeResult, FeedbackError> {
        let tally = self.history.append(&cmd.alternative_id, cmd.outcome).await?;

        tracing::debug!(
            alternative_id = %cmd.alternative_id,
            outcome = ?cmd.outcome,
            failures = tally.failures,
            total = tally.total,
            "Outcome recorded"
        );

        let event = if cmd.outcome.is_failure() && self.policy.crossed(&tally) {
            tracing::warn!(
                alternative_id = %cmd.alternative_id,
                failures = tally.failures,
                total = tally.total,
                threshold = self.policy.failure_threshold(),
                "Forwarder degraded: failures exceeded threshold"
            );

            let event = AlternativeDegraded {
                event_id: EventId::new(),
                alternative_id: cmd.alternative_id,
                failures: tally.failures,
                total: tally.total,
                failure_threshold: self.policy.failure_threshold(),
                detected_at: Timestamp::now(),
            };

            if let Err(source) = self.event_publisher.publish(event.to_envelope()).await {
                tracing::error!(
                    alternative_id = %event.alternative_id,
                    event_id = %event.event_id,
                    error = %source,
                    "Degradation event not published"
                );
                return Err(FeedbackError::DegradationUnpublished { event, source });
            }

            Some(event)
        } else {
            None
        };

        Ok(RecordOutcomeResult {
            tally,
            degraded: self.policy.is_degraded(&tally),
            event,
        })
    }

    /// Publishes a degradation event handed back by a failed `record`.
    ///
    /// The event keeps its original id so subscribers can drop duplicates.
    pub async fn republish(&self, event: &AlternativeDegraded) -> Result<(), DomainError> {
        self.event_publisher.publish(event.to_envelope()).await
    }

    /// Full outcome history of a forwarder, oldest first.
    pub async fn history(&self, alternative_id: &AlternativeId) -> Result<Vec<Outcome>, FeedbackError> {
        Ok(self.history.history(alternative_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::feedback::InMemoryOutcomeHistory;
    use crate::domain::foundation::ErrorCode;

    fn id(value: &str) -> AlternativeId {
        AlternativeId::new(value).unwrap()
    }

    fn tracker(bus: Arc<InMemoryEventBus>) -> FeedbackTracker {
        FeedbackTracker::new(
            Arc::new(InMemoryOutcomeHistory::new()),
            bus,
            DegradationPolicy::default(),
        )
    }

    fn failure(alternative: &str) -> RecordOutcomeCommand {
        RecordOutcomeCommand {
            alternative_id: id(alternative),
            outcome: Outcome::Failure,
        }
    }

    fn success(alternative: &str) -> RecordOutcomeCommand {
        RecordOutcomeCommand {
            alternative_id: id(alternative),
            outcome: Outcome::Success,
        }
    }

    #[tokio::test]
    async fn third_failure_fires_degradation_once() {
        let bus = Arc::new(InMemoryEventBus::new());
        let tracker = tracker(bus.clone());

        let first = tracker.record(failure("B")).await.unwrap();
        let second = tracker.record(failure("B")).await.unwrap();
        let third = tracker.record(failure("B")).await.unwrap();
        let fourth = tracker.record(failure("B")).await.unwrap();

        assert!(first.event.is_none() && !first.degraded);
        assert!(second.event.is_none() && !second.degraded);
        assert!(third.event.is_some() && third.degraded);
        assert!(fourth.event.is_none() && fourth.degraded);
        assert_eq!(bus.events_of_type("feedback.alternative_degraded.v1").len(), 1);
    }

    #[tokio::test]
    async fn success_after_crossing_does_not_fire_again() {
        let bus = Arc::new(InMemoryEventBus::new());
        let tracker = tracker(bus.clone());

        for _ in 0..3 {
            tracker.record(failure("B")).await.unwrap();
        }
        let after = tracker.record(success("B")).await.unwrap();

        assert!(after.event.is_none());
        assert_eq!(after.tally, OutcomeTally { failures: 3, total: 4 });
        assert_eq!(bus.event_count(), 1);
    }

    #[tokio::test]
    async fn successes_interleaved_still_cross_on_third_failure() {
        let bus = Arc::new(InMemoryEventBus::new());
        let tracker = tracker(bus.clone());

        tracker.record(failure("A")).await.unwrap();
        tracker.record(success("A")).await.unwrap();
        tracker.record(failure("A")).await.unwrap();
        tracker.record(success("A")).await.unwrap();
        let crossing = tracker.record(failure("A")).await.unwrap();

        let event = crossing.event.unwrap();
        assert_eq!(event.failures, 3);
        assert_eq!(event.total, 5);
        assert_eq!(event.failure_threshold, 2);
    }

    #[tokio::test]
    async fn forwarders_are_tracked_independently() {
        let bus = Arc::new(InMemoryEventBus::new());
        let tracker = tracker(bus.clone());

        for _ in 0..3 {
            tracker.record(failure("A")).await.unwrap();
        }
        tracker.record(failure("B")).await.unwrap();

        assert_eq!(bus.events_for_aggregate("A").len(), 1);
        assert!(bus.events_for_aggregate("B").is_empty());
        assert_eq!(tracker.history(&id("B")).await.unwrap(), vec![Outcome::Failure]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_failures_fire_exactly_once() {
        let bus = Arc::new(InMemoryEventBus::new());
        let tracker = Arc::new(tracker(bus.clone()));

        let mut handles = Vec::new();
        for _ in 0..32 {
            let tracker = tracker.clone();
            handles.push(tokio::spawn(async move {
                tracker.record(failure("C")).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(bus.events_of_type("feedback.alternative_degraded.v1").len(), 1);
        assert_eq!(tracker.history(&id("C")).await.unwrap().len(), 32);
    }

    #[tokio::test]
    async fn publish_failure_is_reported_after_append() {
        let bus = Arc::new(InMemoryEventBus::failing());
        let tracker = tracker(bus);

        tracker.record(failure("D")).await.unwrap();
        tracker.record(failure("D")).await.unwrap();
        let third = tracker.record(failure("D")).await;

        assert!(matches!(third, Err(FeedbackError::DegradationUnpublished { .. })));
        assert_eq!(tracker.history(&id("D")).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unpublished_degradation_can_be_republished() {
        let bus = Arc::new(InMemoryEventBus::failing());
        let tracker = tracker(bus.clone());

        tracker.record(failure("E")).await.unwrap();
        tracker.record(failure("E")).await.unwrap();
        let (event, source) = match tracker.record(failure("E")).await {
            Err(FeedbackError::DegradationUnpublished { event, source }) => (event, source),
            other => panic!("expected unpublished degradation, got {:?}", other),
        };
        assert_eq!(source.code, ErrorCode::EventPublishFailed);
        assert_eq!(event.alternative_id, id("E"));
        assert_eq!(event.failures, 3);

        // Later appends never raise the event again.
        let fourth = tracker.record(failure("E")).await.unwrap();
        assert!(fourth.event.is_none());

        bus.set_failing(false);
        tracker.republish(&event).await.unwrap();

        let published = bus.events_of_type("feedback.alternative_degraded.v1");
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].event_id, event.event_id);
        assert_eq!(published[0].aggregate_id, "E");
    }
}
