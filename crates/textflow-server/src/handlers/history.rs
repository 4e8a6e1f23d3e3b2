//! Run history API handlers.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::api::{HistoryQuery, HistoryResponse};
use crate::models::RunRecord;
use crate::services::RunService;

/// List recent runs, newest first.
///
/// `GET /api/history`
///
/// # Query Parameters
///
/// - `limit`: number of runs to return (default 5, capped at the history size)
///
/// A malformed query string is answered with the usual JSON error body.
pub async fn list(
    State(service): State<RunService>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> AppResult<Json<HistoryResponse>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    Ok(Json(HistoryResponse {
        history: service.history(query.limit).await,
    }))
}

/// Get a single run.
///
/// `GET /api/history/{id}`
pub async fn get(
    State(service): State<RunService>,
    Path(id): Path<String>,
) -> AppResult<Json<RunRecord>> {
    Ok(Json(service.get(&id).await?))
}
