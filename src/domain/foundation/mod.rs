//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event plumbing, and error types
//! that form the vocabulary of the ranking engine.

mod errors;
mod events;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventEnvelope, EventId, SerializableDomainEvent};
pub use ids::{AlternativeId, RankingRunId, SnapshotId};
pub use timestamp::Timestamp;
