//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `weighting` - Neutrosophic AHP criteria weighting
//! - `ranking` - TOPSIS ranking of forwarders against weighted criteria
//! - `validation` - Output checks and audit snapshot records
//! - `feedback` - Delivery outcome tallies and degradation policy

pub mod feedback;
pub mod foundation;
pub mod ranking;
pub mod validation;
pub mod weighting;
