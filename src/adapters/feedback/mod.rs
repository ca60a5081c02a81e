//! Outcome history adapters.
//!
//! - `InMemoryOutcomeHistory` - Process-local history with per-forwarder locks

mod in_memory_outcome_history;

pub use in_memory_outcome_history::InMemoryOutcomeHistory;
