//! DeepCAL ranking server.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use deepcal_engine::adapters::http::{build_router, RankingAppState};
use deepcal_engine::adapters::{FileSnapshotStore, InMemoryOutcomeHistory, TracingEventPublisher};
use deepcal_engine::application::{
    FeedbackTracker, RankForwardersHandler, RankingSettings, SnapshotDecisionHandler,
};
use deepcal_engine::config::{AppConfig, ServerConfig};
use deepcal_engine::domain::ranking::DecisionModel;
use deepcal_engine::ports::EventPublisher;

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if server.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let publisher: Arc<dyn EventPublisher> = Arc::new(TracingEventPublisher::new());
    let snapshots = SnapshotDecisionHandler::new(
        Arc::new(FileSnapshotStore::new(&config.engine.snapshot_dir)),
        config.engine.engine_version.clone(),
    );
    let ranker = RankForwardersHandler::new(
        snapshots,
        publisher.clone(),
        RankingSettings {
            strict_mode: config.engine.strict_mode,
            degenerate_column_policy: config.engine.degenerate_column_policy,
        },
    );
    let feedback = FeedbackTracker::new(
        Arc::new(InMemoryOutcomeHistory::new()),
        publisher,
        config.engine.degradation_policy(),
    );

    let state = RankingAppState::new(
        Arc::new(ranker),
        Arc::new(feedback),
        DecisionModel::freight_default(),
    );
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        snapshot_dir = %config.engine.snapshot_dir.display(),
        strict_mode = config.engine.strict_mode,
        "DeepCAL engine listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
