//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - Event publishers (in-memory capture, tracing)
//! - `storage` - Audit snapshot stores (files, memory)
//! - `feedback` - Outcome history stores
//! - `http` - Axum REST endpoints

pub mod events;
pub mod feedback;
pub mod http;
pub mod storage;

pub use events::{InMemoryEventBus, TracingEventPublisher};
pub use feedback::InMemoryOutcomeHistory;
pub use storage::{FileSnapshotStore, InMemorySnapshotStore};
