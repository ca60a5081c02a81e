//! Decision model - the criteria and judgments a ranking is run against.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::weighting::{Criterion, Direction, NeutrosophicTriple, PairwiseJudgments};

/// Criteria (with directions) plus the pairwise judgments between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionModel {
    pub criteria: Vec<Criterion>,
    pub judgments: PairwiseJudgments,
}

impl DecisionModel {
    pub fn new(criteria: Vec<Criterion>, judgments: PairwiseJudgments) -> Self {
        Self {
            criteria,
            judgments,
        }
    }

    /// Reference freight model: cost and responsiveness (days to respond)
    /// are lower-is-better, reliability (on-time %) is higher-is-better.
    pub fn freight_default() -> Self {
        let criterion = |name: &str, direction| Criterion {
            name: name.to_string(),
            direction,
        };

        let criteria = vec![
            criterion("Cost", Direction::Cost),
            criterion("Reliability", Direction::Benefit),
            criterion("Responsiveness", Direction::Cost),
        ];

        let judgments = PairwiseJudgments::new()
            .with("Cost", "Reliability", NeutrosophicTriple::from_trusted(0.3, 0.1, 0.6))
            .with("Cost", "Responsiveness", NeutrosophicTriple::from_trusted(0.7, 0.1, 0.2))
            .with(
                "Reliability",
                "Responsiveness",
                NeutrosophicTriple::from_trusted(0.8, 0.1, 0.1),
            );

        Self::new(criteria, judgments)
    }

    /// Criterion names in column order.
    pub fn criterion_names(&self) -> Vec<String> {
        self.criteria.iter().map(|c| c.name.clone()).collect()
    }

    /// Direction of each criterion keyed by name.
    pub fn directions(&self) -> HashMap<String, Direction> {
        self.criteria
            .iter()
            .map(|c| (c.name.clone(), c.direction))
            .collect()
    }
}
