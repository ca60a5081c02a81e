//! Feedback command handlers.

mod feedback_tracker;

pub use feedback_tracker::{FeedbackError, FeedbackTracker, RecordOutcomeCommand, RecordOutcomeResult};
