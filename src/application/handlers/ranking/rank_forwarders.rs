//! RankForwardersHandler - Runs weighting, ranking and validation end to end.
//!
//! Pipeline: derive criterion weights from the model's judgments, rank the
//! forwarders with TOPSIS, validate matrix/weights/scores, write the audit
//! snapshot when validation passes, then publish `RankingCompleted`.

use serde_json::{Map, Value};
use std::sync::Arc;

use super::{SnapshotDecisionCommand, SnapshotDecisionHandler, SnapshotDecisionResult};
use crate::domain::foundation::{
    AlternativeId, DomainError, EventId, RankingRunId, SerializableDomainEvent, Timestamp,
};
use crate::domain::ranking::{
    AlternativeRanking, DecisionMatrix, DecisionModel, DegenerateColumnPolicy, RankingCompleted,
    RankingError, RankingExplanation, RankingResult, ScoredAlternative,
};
use crate::domain::validation::{CalculationValidator, ValidationReport};
use crate::domain::weighting::{Consistency, CriteriaWeighting, WeightVector, WeightingError};
use crate::ports::{EventPublisher, SnapshotStoreError};

/// Behaviour switches for a ranking run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankingSettings {
    /// Fail the run when validation fails instead of returning the ranking.
    pub strict_mode: bool,
    pub degenerate_column_policy: DegenerateColumnPolicy,
}

/// Command to rank a set of forwarders.
#[derive(Debug, Clone)]
pub struct RankForwardersCommand {
    pub model: DecisionModel,
    pub forwarders: Vec<AlternativeId>,
    /// One row per forwarder, one column per model criterion.
    pub matrix: Vec<Vec<f64>>,
    /// Caller context copied into the audit snapshot.
    pub metadata: Map<String, Value>,
}

/// Result of a ranking run.
#[derive(Debug, Clone)]
pub struct RankForwardersResult {
    pub run_id: RankingRunId,
    pub ranking: RankingResult,
    pub weights: WeightVector,
    pub consistency: Consistency,
    pub validation: ValidationReport,
    pub snapshot: Option<SnapshotDecisionResult>,
    pub explanation: Option<RankingExplanation>,
    pub event: RankingCompleted,
}

/// Errors from a ranking run.
#[derive(Debug, thiserror::Error)]
pub enum RankForwardersError {
    #[error(transparent)]
    Weighting(#[from] WeightingError),

    #[error(transparent)]
    Ranking(#[from] RankingError),

    #[error("Ranking failed validation: {0}")]
    ValidationFailed(ValidationReport),

    #[error("Audit snapshot failed: {0}")]
    Snapshot(#[from] SnapshotStoreError),

    #[error("Event publishing failed: {0}")]
    EventPublish(DomainError),
}

/// Handler for ranking forwarders.
pub struct RankForwardersHandler {
    snapshots: SnapshotDecisionHandler,
    event_publisher: Arc<dyn EventPublisher>,
    settings: RankingSettings,
}

impl RankForwardersHandler {
    pub fn new(
        snapshots: SnapshotDecisionHandler,
        event_publisher: Arc<dyn EventPublisher>,
        settings: RankingSettings,
    ) -> Self {
        Self {
            snapshots,
            event_publisher,
            settings,
        }
    }

    pub fn settings(&self) -> RankingSettings {
        self.settings
    }

    pub fn engine_version(&self) -> &str {
        self.snapshots.engine_version()
    }

    pub async fn handle(
        &self,
        cmd: RankForwardersCommand,
    ) -> Result<RankForwardersResult, RankForwardersError> {
        let run_id = RankingRunId::new();
        let criteria = cmd.model.criterion_names();

        // 1. Weight the criteria
        let derivation = CriteriaWeighting::derive(&criteria, &cmd.model.judgments)?;

        // 2. Rank the forwarders
        let mut ranker = AlternativeRanking::with_policy(self.settings.degenerate_column_policy);
        ranker.load(cmd.forwarders, DecisionMatrix::new(cmd.matrix.clone())?)?;
        let ranking = ranker.rank(&criteria, &derivation.weights, &cmd.model.directions())?;

        // 3. Validate
        let weight_map = derivation.weights.to_map();
        let scores = ranking.scores();
        let validation = CalculationValidator::report(&cmd.matrix, &weight_map, &scores);

        if !validation.all_valid() {
            tracing::warn!(
                run_id = %run_id,
                failures = %validation,
                strict = self.settings.strict_mode,
                "Ranking failed validation; skipping audit snapshot"
            );
            if self.settings.strict_mode {
                return Err(RankForwardersError::ValidationFailed(validation));
            }
        }

        // 4. Snapshot only validated runs
        // Rows, ids and scores stay in submission order so `matrix[i]`
        // belongs to `forwarders[i]`.
        let snapshot = if validation.all_valid() {
            let forwarders = ranker.alternatives().to_vec();
            let input_scores = ranking.scores_for(&forwarders);
            let mut metadata = cmd.metadata;
            metadata.insert("run_id".to_string(), Value::from(run_id.to_string()));
            metadata.insert(
                "consistency_ratio".to_string(),
                Value::from(derivation.consistency.ratio),
            );
            Some(
                self.snapshots
                    .handle(SnapshotDecisionCommand {
                        matrix: cmd.matrix,
                        weights: weight_map.clone(),
                        scores: input_scores,
                        forwarders,
                        ranked_forwarders: ranking.alternative_ids(),
                        metadata,
                    })
                    .await?,
            )
        } else {
            None
        };

        // 5. Publish
        let event = RankingCompleted {
            event_id: EventId::new(),
            run_id,
            ranking: ranking
                .iter()
                .map(|entry| ScoredAlternative {
                    alternative_id: entry.alternative_id.to_string(),
                    closeness: entry.closeness,
                })
                .collect(),
            weights: weight_map,
            consistency_ratio: derivation.consistency.ratio,
            validated: validation.all_valid(),
            snapshot_id: snapshot.as_ref().map(|s| s.snapshot_id),
            completed_at: Timestamp::now(),
        };

        self.event_publisher
            .publish(event.to_envelope())
            .await
            .map_err(RankForwardersError::EventPublish)?;

        let explanation = RankingExplanation::explain(&derivation.weights, &ranking);

        tracing::info!(
            run_id = %run_id,
            forwarders = ranking.len(),
            winner = ranking.best().map(|b| b.alternative_id.as_str()).unwrap_or_default(),
            validated = validation.all_valid(),
            "Ranking completed"
        );

        Ok(RankForwardersResult {
            run_id,
            ranking,
            weights: derivation.weights,
            consistency: derivation.consistency,
            validation,
            snapshot,
            explanation,
            event,
        })
    }
}
