//! Run API handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::AppResult;
use crate::models::api::{RunFailureResponse, RunRequest, RunResponse};
use crate::services::RunService;

/// Execute a pipeline against the given text.
///
/// `POST /api/run`
///
/// # Request Body
///
/// ```json
/// {
///   "workflowName": "Morning Digest",
///   "workflowId": "optional saved workflow id",
///   "steps": ["CLEAN_TEXT", "SUMMARIZE"],
///   "inputText": "Text to process..."
/// }
/// ```
///
/// # Returns
///
/// - `200 OK` with `{"result": RunRecord}` when every step completed
/// - `400 Bad Request` when validation fails; nothing is recorded
/// - `502 Bad Gateway` with `{"error": "...", "partialResults": RunRecord}`
///   when a step failed; the record holds the steps that completed
pub async fn run(
    State(service): State<RunService>,
    Json(request): Json<RunRequest>,
) -> AppResult<Response> {
    let record = service.run(request).await?;

    if record.is_success() {
        return Ok(Json(RunResponse { result: record }).into_response());
    }

    let error = record
        .error
        .clone()
        .unwrap_or_else(|| "Workflow execution failed".to_string());

    Ok((
        StatusCode::BAD_GATEWAY,
        Json(RunFailureResponse {
            error,
            partial_results: record,
        }),
    )
        .into_response())
}
