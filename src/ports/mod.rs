//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EventPublisher` - Publishing domain events
//! - `SnapshotStore` - Write-once audit snapshot persistence
//! - `OutcomeHistoryStore` - Per-forwarder delivery outcome history

mod event_publisher;
mod outcome_history_store;
mod snapshot_store;

pub use event_publisher::EventPublisher;
pub use outcome_history_store::{OutcomeHistoryError, OutcomeHistoryStore};
pub use snapshot_store::{SnapshotStore, SnapshotStoreError};
