//! Feedback domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, AlternativeId, EventId, Timestamp};

/// Published once when a forwarder's failures first exceed the threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeDegraded {
    pub event_id: EventId,
    pub alternative_id: AlternativeId,
    pub failures: usize,
    pub total: usize,
    pub failure_threshold: usize,
    pub detected_at: Timestamp,
}

domain_event!(
    AlternativeDegraded,
    event_type = "feedback.alternative_degraded.v1",
    schema_version = 1,
    aggregate_id = alternative_id,
    aggregate_type = "Alternative",
    occurred_at = detected_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SerializableDomainEvent;

    #[test]
    fn envelope_is_keyed_by_alternative() {
        let event = AlternativeDegraded {
            event_id: EventId::new(),
            alternative_id: AlternativeId::new("B").unwrap(),
            failures: 3,
            total: 5,
            failure_threshold: 2,
            detected_at: Timestamp::now(),
        };

        let envelope = event.to_envelope();

        assert_eq!(envelope.event_type, "feedback.alternative_degraded.v1");
        assert_eq!(envelope.aggregate_type, "Alternative");
        assert_eq!(envelope.aggregate_id, "B");
        assert_eq!(envelope.payload["failures"], 3);
    }
}
