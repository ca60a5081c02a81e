//! Feedback - delivery outcome history and degradation detection.

mod degradation;
mod events;
mod outcome;

pub use degradation::{DegradationPolicy, DEFAULT_FAILURE_THRESHOLD};
pub use events::AlternativeDegraded;
pub use outcome::{Outcome, OutcomeTally};
