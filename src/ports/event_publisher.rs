//! EventPublisher port - Interface for publishing domain events.
//!
//! Handlers publish `RankingCompleted` and `AlternativeDegraded` through this
//! port without knowing whether events end up in memory or in the log stream.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must propagate delivery errors to the caller.
///
/// # Example
///
/// ```ignore
/// let envelope = degraded.to_envelope();
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events in order.
    ///
    /// Adapters without batch support publish sequentially and stop at the
    /// first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn EventPublisher) {}

    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn event_publisher_is_send_sync() {
        #[allow(dead_code)]
        fn check<T: EventPublisher>() {
            assert_send_sync::<T>();
        }
    }
}
