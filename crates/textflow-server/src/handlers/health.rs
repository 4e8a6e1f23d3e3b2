//! Health check endpoints for the TextFlow API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Health status ("ok" or "unhealthy")
    pub status: String,
}

/// Detailed health check response for the API.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealthResponse {
    /// Overall health status
    pub status: String,

    /// Language model reachability
    pub llm: LlmHealth,

    /// Runs currently held in history
    pub history_size: usize,

    /// Maximum number of runs kept
    pub history_capacity: usize,

    /// Saved workflow definitions
    pub workflow_count: usize,

    /// Server uptime in seconds
    pub uptime_seconds: u64,

    /// Server version
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LlmHealth {
    pub healthy: bool,
    pub message: String,
}

/// Basic health check endpoint.
///
/// `GET /health`
///
/// Returns quickly without touching the language model, so it is suitable
/// for load balancer probes.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}

/// Detailed API health check endpoint.
///
/// `GET /api/health`
///
/// # Returns
///
/// - `200 OK` when the language model answers
/// - `503 Service Unavailable` otherwise
pub async fn api_health(State(state): State<AppState>) -> (StatusCode, Json<ApiHealthResponse>) {
    let llm = state.transform.check_health().await;

    let status_code = if llm.healthy {
        StatusCode::OK
    } else {
        tracing::warn!(message = %llm.message, "LLM health check failed");
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = ApiHealthResponse {
        status: if llm.healthy { "ok" } else { "unhealthy" }.to_string(),
        llm: LlmHealth {
            healthy: llm.healthy,
            message: llm.message,
        },
        history_size: state.history.len().await,
        history_capacity: state.history.capacity(),
        workflow_count: state.workflows.len().await,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (status_code, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await;
        assert_eq!(response.status, "ok");
    }
}
