//! Request and response bodies for the ranking endpoints.
//!
//! Field names follow the chat front-end contract (`closenessCoefficient`,
//! `engineVersion`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::handlers::{RankForwardersResult, RecordOutcomeResult};
use crate::domain::foundation::{AlternativeId, DomainError};

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// POST /rankings body.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingRequest {
    /// One row per forwarder: `[cost, reliability %, response days]`.
    pub matrix: Vec<Vec<f64>>,
    pub forwarders: Vec<String>,
    /// Free-form context stored with the audit snapshot.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// POST /feedback body.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub forwarder: String,
    pub success: bool,
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// One entry of the POST /rankings response, in ranked order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedForwarder {
    pub forwarder: String,
    pub closeness_coefficient: f64,
}

impl RankedForwarder {
    pub fn from_result(result: &RankForwardersResult) -> Vec<Self> {
        result
            .ranking
            .iter()
            .map(|entry| Self {
                forwarder: entry.alternative_id.to_string(),
                closeness_coefficient: entry.closeness,
            })
            .collect()
    }
}

/// POST /feedback response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub forwarder: String,
    pub failures: usize,
    pub total: usize,
    pub degraded: bool,
}

impl FeedbackResponse {
    pub fn new(forwarder: &AlternativeId, result: &RecordOutcomeResult) -> Self {
        Self {
            forwarder: forwarder.to_string(),
            failures: result.tally.failures,
            total: result.tally.total,
            degraded: result.degraded,
        }
    }
}

/// GET /health response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub engine_version: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    /// Response body for a domain error; details are omitted when empty.
    pub fn from_domain(err: &DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }

    pub fn validation_failed(message: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use serde_json::json;

    #[test]
    fn ranked_forwarder_uses_camel_case() {
        let entry = RankedForwarder {
            forwarder: "C".to_string(),
            closeness_coefficient: 0.81,
        };
        assert_eq!(
            serde_json::to_value(entry).unwrap(),
            json!({"forwarder": "C", "closenessCoefficient": 0.81})
        );
    }

    #[test]
    fn ranking_request_metadata_is_optional() {
        let request: RankingRequest =
            serde_json::from_value(json!({"matrix": [[1.0]], "forwarders": ["A"]})).unwrap();
        assert!(request.metadata.is_empty());
    }

    #[test]
    fn error_response_omits_missing_details() {
        let err = DomainError::new(ErrorCode::MalformedMatrix, "nope");
        let body = serde_json::to_value(ErrorResponse::from_domain(&err)).unwrap();
        assert_eq!(body, json!({"code": "MALFORMED_MATRIX", "message": "nope"}));
    }

    #[test]
    fn error_response_carries_domain_details() {
        let err = DomainError::new(ErrorCode::StorageError, "gone").with_detail("snapshot_id", "s-1");
        let body = serde_json::to_value(ErrorResponse::from_domain(&err)).unwrap();
        assert_eq!(body["details"], json!({"snapshot_id": "s-1"}));
    }
}
