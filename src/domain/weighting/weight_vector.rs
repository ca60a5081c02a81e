//! Normalized criterion weights.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// One non-negative weight per criterion, in criteria order.
///
/// Serializes as a `criterion -> weight` map that keeps criteria order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    entries: Vec<(String, f64)>,
}

impl WeightVector {
    /// Pairs criteria with weights. Extra items on either side are dropped.
    pub fn new(criteria: &[String], weights: &[f64]) -> Self {
        Self {
            entries: criteria
                .iter()
                .cloned()
                .zip(weights.iter().copied())
                .collect(),
        }
    }

    /// Weight of a criterion, if present.
    pub fn get(&self, criterion: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == criterion)
            .map(|(_, w)| *w)
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, w)| (name.as_str(), *w))
    }

    /// Weights in criteria order.
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, w)| *w).collect()
    }

    /// Criterion with the largest weight; the first one wins a tie.
    pub fn dominant(&self) -> Option<(&str, f64)> {
        self.iter().fold(None, |best, (name, w)| match best {
            Some((_, bw)) if bw >= w => best,
            _ => Some((name, w)),
        })
    }

    /// Weights keyed by criterion name.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.entries.iter().cloned().collect()
    }
}

impl Serialize for WeightVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, weight) in &self.entries {
            map.serialize_entry(name, weight)?;
        }
        map.end()
    }
}
