//! Plain-language explanation of a ranking.

use serde::Serialize;

use super::RankingResult;
use crate::domain::weighting::WeightVector;

/// Short human-readable account of why the winner won.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingExplanation {
    pub winner: String,
    pub winner_closeness: f64,
    pub primary_criterion: String,
    pub primary_weight: f64,
    pub summary: String,
}

impl RankingExplanation {
    /// Explains a ranking. Returns `None` for an empty ranking or weights.
    pub fn explain(weights: &WeightVector, ranking: &RankingResult) -> Option<Self> {
        let best = ranking.best()?;
        let (criterion, weight) = weights.dominant()?;

        let summary = format!(
            "Forwarder {} ranks first with closeness {:.4}. The most heavily weighted \
             criterion is {} ({:.1}% of the decision). All {} forwarders were compared \
             by distance to the best and worst observed performance.",
            best.alternative_id,
            best.closeness,
            criterion,
            weight * 100.0,
            ranking.len(),
        );

        Some(Self {
            winner: best.alternative_id.to_string(),
            winner_closeness: best.closeness,
            primary_criterion: criterion.to_string(),
            primary_weight: weight,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AlternativeId;
    use crate::domain::ranking::RankedAlternative;

    fn ranking() -> RankingResult {
        RankingResult::from_unsorted(vec![
            RankedAlternative {
                alternative_id: AlternativeId::new("B").unwrap(),
                closeness: 0.25,
                distance_to_ideal: 0.3,
                distance_to_anti_ideal: 0.1,
            },
            RankedAlternative {
                alternative_id: AlternativeId::new("C").unwrap(),
                closeness: 0.8123,
                distance_to_ideal: 0.05,
                distance_to_anti_ideal: 0.2,
            },
        ])
    }

    #[test]
    fn names_winner_and_primary_criterion() {
        let criteria = vec!["Cost".to_string(), "Reliability".to_string()];
        let weights = WeightVector::new(&criteria, &[0.4, 0.6]);

        let explanation = RankingExplanation::explain(&weights, &ranking()).unwrap();

        assert_eq!(explanation.winner, "C");
        assert_eq!(explanation.primary_criterion, "Reliability");
        assert!(explanation.summary.starts_with("Forwarder C ranks first with closeness 0.8123."));
        assert!(explanation.summary.contains("Reliability (60.0% of the decision)"));
    }

    #[test]
    fn empty_ranking_has_no_explanation() {
        let criteria = vec!["Cost".to_string()];
        let weights = WeightVector::new(&criteria, &[1.0]);
        let empty = RankingResult::from_unsorted(Vec::new());

        assert!(RankingExplanation::explain(&weights, &empty).is_none());
    }
}
