//! Integration tests for the ranking pipeline.
//!
//! These tests run the full flow against the public API:
//! 1. Criteria weighting from neutrosophic judgments
//! 2. TOPSIS ranking of the freight forwarders
//! 3. Validation and the file-backed audit snapshot
//! 4. RankingCompleted publication

use serde_json::{json, Map};
use std::sync::Arc;
use tempfile::TempDir;

use deepcal_engine::adapters::{FileSnapshotStore, InMemoryEventBus};
use deepcal_engine::application::{
    RankForwardersCommand, RankForwardersHandler, RankingSettings, SnapshotDecisionHandler,
};
use deepcal_engine::domain::foundation::AlternativeId;
use deepcal_engine::domain::ranking::DecisionModel;
use deepcal_engine::domain::validation::{dataset_hash, CalculationValidator};
use deepcal_engine::domain::weighting::CriteriaWeighting;
use deepcal_engine::ports::SnapshotStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn freight_matrix() -> Vec<Vec<f64>> {
    vec![
        vec![1200.0, 92.0, 5.0],
        vec![1000.0, 85.0, 9.0],
        vec![1300.0, 97.0, 3.0],
        vec![1100.0, 90.0, 4.0],
    ]
}

fn forwarders() -> Vec<AlternativeId> {
    ["A", "B", "C", "D"]
        .iter()
        .map(|id| AlternativeId::new(*id).unwrap())
        .collect()
}

fn command() -> RankForwardersCommand {
    let mut metadata = Map::new();
    metadata.insert("shipment".to_string(), json!("SHP-0042"));
    RankForwardersCommand {
        model: DecisionModel::freight_default(),
        forwarders: forwarders(),
        matrix: freight_matrix(),
        metadata,
    }
}

struct Pipeline {
    handler: RankForwardersHandler,
    store: Arc<FileSnapshotStore>,
    bus: Arc<InMemoryEventBus>,
    _dir: TempDir,
}

fn pipeline() -> Pipeline {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileSnapshotStore::new(dir.path().join("snapshots")));
    let bus = Arc::new(InMemoryEventBus::new());
    let handler = RankForwardersHandler::new(
        SnapshotDecisionHandler::new(store.clone(), "v1.0.0"),
        bus.clone(),
        RankingSettings::default(),
    );
    Pipeline {
        handler,
        store,
        bus,
        _dir: dir,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn freight_weights_favour_reliability() {
    let model = DecisionModel::freight_default();
    let weights =
        CriteriaWeighting::compute_weights(&model.criterion_names(), &model.judgments).unwrap();

    assert_eq!(weights.len(), 3);
    assert!((weights.sum() - 1.0).abs() < 1e-6);
    let reliability = weights.get("Reliability").unwrap();
    let cost = weights.get("Cost").unwrap();
    let responsiveness = weights.get("Responsiveness").unwrap();
    assert!(reliability > cost && cost > responsiveness);
}

#[tokio::test]
async fn freight_scenario_ranks_all_four_forwarders() {
    let p = pipeline();

    let result = p.handler.handle(command()).await.unwrap();

    let order: Vec<String> = result
        .ranking
        .alternative_ids()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(order, vec!["D", "C", "A", "B"]);

    let scores = result.ranking.scores();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
}

#[tokio::test]
async fn pipeline_output_passes_validation() {
    let p = pipeline();

    let result = p.handler.handle(command()).await.unwrap();

    assert!(CalculationValidator::validate_all(
        &freight_matrix(),
        &result.weights.to_map(),
        &result.ranking.scores(),
    ));
    assert!(result.validation.all_valid());
}

#[tokio::test]
async fn validated_run_leaves_a_readable_snapshot() {
    let p = pipeline();

    let result = p.handler.handle(command()).await.unwrap();
    let receipt = result.snapshot.unwrap();

    let ids = p.store.list().await.unwrap();
    assert_eq!(ids, vec![receipt.snapshot_id]);

    let snapshot = p.store.load(receipt.snapshot_id).await.unwrap();
    assert_eq!(snapshot.matrix, freight_matrix());
    assert_eq!(snapshot.dataset_hash, dataset_hash(&freight_matrix()));
    assert_eq!(snapshot.engine_version, "v1.0.0");
    assert_eq!(snapshot.ranked_forwarders, result.ranking.alternative_ids());
    assert_eq!(
        snapshot.scores,
        result.ranking.scores_for(&snapshot.forwarders)
    );

    // Each stored row is the one submitted for the forwarder at that index.
    let submitted = forwarders();
    assert_eq!(snapshot.forwarders, submitted);
    for (i, forwarder) in submitted.iter().enumerate() {
        assert_eq!(snapshot.matrix[i], freight_matrix()[i], "row of {}", forwarder);
        assert_eq!(
            Some(snapshot.scores[i]),
            result.ranking.score_of(forwarder.as_str())
        );
    }
    assert_eq!(snapshot.metadata["shipment"], "SHP-0042");
    assert!(CalculationValidator::validate_all(
        &snapshot.matrix,
        &snapshot.weights,
        &snapshot.scores
    ));
}

#[tokio::test]
async fn repeated_runs_are_deterministic_and_never_collide() {
    let p = pipeline();

    let first = p.handler.handle(command()).await.unwrap();
    let second = p.handler.handle(command()).await.unwrap();
    let third = p.handler.handle(command()).await.unwrap();

    assert_eq!(first.ranking, second.ranking);
    assert_eq!(second.ranking, third.ranking);
    assert_eq!(p.store.list().await.unwrap().len(), 3);
    assert_eq!(p.bus.events_of_type("ranking.completed.v1").len(), 3);
}
