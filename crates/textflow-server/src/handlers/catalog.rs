//! Catalog API handlers.
//!
//! Read-only endpoints for the step catalog and the built-in templates.

use axum::Json;

use crate::catalog::{StepKind, TEMPLATES};
use crate::models::api::{StepCatalogResponse, StepInfo, TemplateInfo, TemplateListResponse};

/// List every step kind.
///
/// `GET /api/steps`
///
/// # Response
///
/// ```json
/// {
///   "steps": [
///     {"type": "CLEAN_TEXT", "label": "Clean Text", "description": "...", "icon": "🧹"},
///     ...
///   ]
/// }
/// ```
pub async fn list_steps() -> Json<StepCatalogResponse> {
    Json(StepCatalogResponse {
        steps: StepKind::ALL
            .iter()
            .map(|kind| StepInfo::from(kind.descriptor()))
            .collect(),
    })
}

/// List the built-in templates.
///
/// `GET /api/templates`
pub async fn list_templates() -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: TEMPLATES.iter().map(TemplateInfo::from).collect(),
    })
}
