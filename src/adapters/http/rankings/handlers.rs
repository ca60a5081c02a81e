//! HTTP handlers for the ranking endpoints.
//!
//! These handlers connect Axum routes to the ranking and feedback handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    FeedbackError, FeedbackTracker, RankForwardersCommand, RankForwardersError,
    RankForwardersHandler, RecordOutcomeCommand,
};
use crate::domain::feedback::Outcome;
use crate::domain::foundation::{AlternativeId, DomainError, ErrorCode};
use crate::domain::ranking::DecisionModel;
use crate::domain::validation::ValidationReport;

use super::dto::{
    ErrorResponse, FeedbackRequest, FeedbackResponse, HealthResponse, RankedForwarder,
    RankingRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Ranking API error that implements IntoResponse.
#[derive(Debug)]
pub enum RankingApiError {
    BadRequest(DomainError),
    ValidationFailed(ValidationReport),
    Internal(DomainError),
}

impl IntoResponse for RankingApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            RankingApiError::BadRequest(err) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::from_domain(&err))
            }
            RankingApiError::ValidationFailed(report) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::validation_failed(
                    format!("Ranking failed validation: {}", report),
                    serde_json::to_value(&report.failures).ok(),
                ),
            ),
            RankingApiError::Internal(err) => {
                tracing::error!(code = %err.code, error = %err.message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::from_domain(&err),
                )
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<RankForwardersError> for RankingApiError {
    fn from(error: RankForwardersError) -> Self {
        match error {
            RankForwardersError::Weighting(e) => RankingApiError::BadRequest(e.into()),
            RankForwardersError::Ranking(e) => RankingApiError::BadRequest(e.into()),
            RankForwardersError::ValidationFailed(report) => RankingApiError::ValidationFailed(report),
            RankForwardersError::Snapshot(e) => RankingApiError::Internal(e.into()),
            RankForwardersError::EventPublish(e) => RankingApiError::Internal(e),
        }
    }
}

impl From<FeedbackError> for RankingApiError {
    fn from(error: FeedbackError) -> Self {
        match error {
            FeedbackError::History(e) => RankingApiError::Internal(e.into()),
            FeedbackError::DegradationUnpublished { event, source } => RankingApiError::Internal(
                source
                    .with_detail("alternative_id", event.alternative_id.to_string())
                    .with_detail("event_id", event.event_id.to_string()),
            ),
        }
    }
}

impl From<JsonRejection> for RankingApiError {
    fn from(rejection: JsonRejection) -> Self {
        RankingApiError::BadRequest(DomainError::new(
            ErrorCode::InvalidFormat,
            rejection.body_text(),
        ))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for the ranking endpoints.
#[derive(Clone)]
pub struct RankingAppState {
    pub ranker: Arc<RankForwardersHandler>,
    pub feedback: Arc<FeedbackTracker>,
    /// Criteria and judgments every POST /rankings request is scored against.
    pub model: Arc<DecisionModel>,
}

impl RankingAppState {
    pub fn new(
        ranker: Arc<RankForwardersHandler>,
        feedback: Arc<FeedbackTracker>,
        model: DecisionModel,
    ) -> Self {
        Self {
            ranker,
            feedback,
            model: Arc::new(model),
        }
    }
}

fn parse_forwarder(value: &str) -> Result<AlternativeId, RankingApiError> {
    AlternativeId::new(value)
        .map_err(|e| RankingApiError::BadRequest(DomainError::from(e).with_detail("field", "forwarder")))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /rankings
///
/// Ranks the submitted forwarders against the configured decision model.
pub async fn rank_forwarders(
    State(state): State<RankingAppState>,
    body: Result<Json<RankingRequest>, JsonRejection>,
) -> Result<Json<Vec<RankedForwarder>>, RankingApiError> {
    let Json(request) = body?;

    let forwarders = request
        .forwarders
        .iter()
        .map(|f| parse_forwarder(f))
        .collect::<Result<Vec<_>, _>>()?;

    let cmd = RankForwardersCommand {
        model: state.model.as_ref().clone(),
        forwarders,
        matrix: request.matrix,
        metadata: request.metadata,
    };

    let result = state.ranker.handle(cmd).await?;

    Ok(Json(RankedForwarder::from_result(&result)))
}

/// POST /feedback
///
/// Records one delivery outcome for a forwarder.
pub async fn record_feedback(
    State(state): State<RankingAppState>,
    body: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, RankingApiError> {
    let Json(request) = body?;
    let alternative_id = parse_forwarder(&request.forwarder)?;

    let result = state
        .feedback
        .record(RecordOutcomeCommand {
            alternative_id: alternative_id.clone(),
            outcome: Outcome::from_success_flag(request.success),
        })
        .await?;

    Ok(Json(FeedbackResponse::new(&alternative_id, &result)))
}

/// GET /health
pub async fn health(State(state): State<RankingAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        engine_version: state.ranker.engine_version().to_string(),
    })
}
