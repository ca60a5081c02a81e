//! Ranking result - alternatives ordered by closeness coefficient.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AlternativeId;

/// One alternative's TOPSIS outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative_id: AlternativeId,
    /// `d- / (d+ + d-)`, in `[0, 1]`; higher is better.
    pub closeness: f64,
    /// Euclidean distance to the ideal point (`d+`).
    pub distance_to_ideal: f64,
    /// Euclidean distance to the anti-ideal point (`d-`).
    pub distance_to_anti_ideal: f64,
}

/// Alternatives sorted by descending closeness.
///
/// Equal scores keep the order in which the alternatives were loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingResult {
    entries: Vec<RankedAlternative>,
}

impl RankingResult {
    /// Sorts the entries (stable, descending by closeness) and wraps them.
    pub fn from_unsorted(mut entries: Vec<RankedAlternative>) -> Self {
        entries.sort_by(|a, b| b.closeness.total_cmp(&a.closeness));
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedAlternative] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedAlternative> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-ranked alternative.
    pub fn best(&self) -> Option<&RankedAlternative> {
        self.entries.first()
    }

    /// Closeness coefficients in ranked order.
    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.closeness).collect()
    }

    /// Alternative identifiers in ranked order.
    pub fn alternative_ids(&self) -> Vec<AlternativeId> {
        self.entries.iter().map(|e| e.alternative_id.clone()).collect()
    }

    /// Closeness coefficients in the order of `alternatives`.
    ///
    /// Identifiers missing from the ranking are skipped.
    pub fn scores_for(&self, alternatives: &[AlternativeId]) -> Vec<f64> {
        alternatives
            .iter()
            .filter_map(|id| self.score_of(id.as_str()))
            .collect()
    }

    /// Closeness of a specific alternative.
    pub fn score_of(&self, alternative_id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.alternative_id.as_str() == alternative_id)
            .map(|e| e.closeness)
    }

    /// 1-based position of an alternative.
    pub fn position_of(&self, alternative_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.alternative_id.as_str() == alternative_id)
            .map(|p| p + 1)
    }
}
