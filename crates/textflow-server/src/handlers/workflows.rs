//! Workflow definition API handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::api::{
    CreateWorkflowRequest, DeleteWorkflowQuery, WorkflowListResponse, WorkflowResponse,
};
use crate::services::WorkflowService;

/// List saved workflows, newest first.
///
/// `GET /api/workflows`
pub async fn list(State(service): State<WorkflowService>) -> Json<WorkflowListResponse> {
    Json(WorkflowListResponse {
        workflows: service.list().await,
    })
}

/// Save a workflow.
///
/// `POST /api/workflows`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Morning Digest",
///   "steps": ["CLEAN_TEXT", "SUMMARIZE", "TRANSLATE"]
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{"workflow": {...}}`
pub async fn create(
    State(service): State<WorkflowService>,
    Json(request): Json<CreateWorkflowRequest>,
) -> AppResult<(StatusCode, Json<WorkflowResponse>)> {
    let workflow = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(WorkflowResponse { workflow })))
}

/// Get a saved workflow.
///
/// `GET /api/workflows/{id}`
pub async fn get(
    State(service): State<WorkflowService>,
    Path(id): Path<String>,
) -> AppResult<Json<WorkflowResponse>> {
    let workflow = service.get(&id).await?;
    Ok(Json(WorkflowResponse { workflow }))
}

/// Delete a saved workflow by path.
///
/// `DELETE /api/workflows/{id}`
pub async fn delete(
    State(service): State<WorkflowService>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    service.delete(&id).await?;
    Ok(Json(json!({ "success": true })))
}

/// Delete a saved workflow by query parameter.
///
/// `DELETE /api/workflows?id=...`
pub async fn delete_by_query(
    State(service): State<WorkflowService>,
    Query(query): Query<DeleteWorkflowQuery>,
) -> AppResult<Json<Value>> {
    let id = query
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Workflow ID is required".to_string()))?;

    service.delete(&id).await?;
    Ok(Json(json!({ "success": true })))
}
