//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for one ranking run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingRunId(Uuid);

impl RankingRunId {
    /// Creates a new random RankingRunId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RankingRunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RankingRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RankingRunId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for an audit snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(Uuid);

impl SnapshotId {
    /// Creates a new random SnapshotId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SnapshotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnapshotId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identifier of an alternative (a freight forwarder) being ranked.
///
/// Free-form, but never empty or blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AlternativeId(String);

impl AlternativeId {
    /// Creates an AlternativeId, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("alternative_id"));
        }
        Ok(Self(value))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlternativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AlternativeId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AlternativeId> for String {
    fn from(id: AlternativeId) -> Self {
        id.0
    }
}

impl FromStr for AlternativeId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_ids_are_unique() {
        assert_ne!(RankingRunId::new(), RankingRunId::new());
    }

    #[test]
    fn snapshot_id_round_trips_through_string() {
        let id = SnapshotId::new();
        let parsed: SnapshotId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn snapshot_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<SnapshotId>().is_err());
    }

    #[test]
    fn alternative_id_rejects_blank() {
        assert!(AlternativeId::new("").is_err());
        assert!(AlternativeId::new("   ").is_err());
    }

    #[test]
    fn alternative_id_deserialization_validates() {
        let ok: AlternativeId = serde_json::from_str("\"Kuehne\"").unwrap();
        assert_eq!(ok.as_str(), "Kuehne");

        let blank: Result<AlternativeId, _> = serde_json::from_str("\"\"");
        assert!(blank.is_err());
    }
}
