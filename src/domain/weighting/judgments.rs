//! Pairwise judgments between criteria.

use serde::{Deserialize, Serialize};

use super::NeutrosophicTriple;

/// One directional judgment: how strongly `preferred` outranks `other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseJudgment {
    pub preferred: String,
    pub other: String,
    pub triple: NeutrosophicTriple,
}

impl PairwiseJudgment {
    /// Creates a judgment for the ordered pair `(preferred, other)`.
    pub fn new(
        preferred: impl Into<String>,
        other: impl Into<String>,
        triple: NeutrosophicTriple,
    ) -> Self {
        Self {
            preferred: preferred.into(),
            other: other.into(),
            triple,
        }
    }
}

/// Ordered collection of pairwise judgments.
///
/// Judgments are applied in insertion order, so when both `(a, b)` and
/// `(b, a)` are present the later one decides both comparison cells.
/// Pairs that never appear are treated as equal importance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairwiseJudgments {
    judgments: Vec<PairwiseJudgment>,
}

impl PairwiseJudgments {
    /// Creates an empty set of judgments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a judgment.
    pub fn insert(
        &mut self,
        preferred: impl Into<String>,
        other: impl Into<String>,
        triple: NeutrosophicTriple,
    ) {
        self.judgments
            .push(PairwiseJudgment::new(preferred, other, triple));
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(
        mut self,
        preferred: impl Into<String>,
        other: impl Into<String>,
        triple: NeutrosophicTriple,
    ) -> Self {
        self.insert(preferred, other, triple);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &PairwiseJudgment> {
        self.judgments.iter()
    }

    pub fn len(&self) -> usize {
        self.judgments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.judgments.is_empty()
    }
}

impl FromIterator<PairwiseJudgment> for PairwiseJudgments {
    fn from_iter<I: IntoIterator<Item = PairwiseJudgment>>(iter: I) -> Self {
        Self {
            judgments: iter.into_iter().collect(),
        }
    }
}
