//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

use super::{RunRecord, WorkflowDefinition};
use crate::catalog::{StepDescriptor, StepKind, WorkflowTemplate};

/// Body of `POST /api/run`.
///
/// Steps arrive as raw identifiers so an unknown one can be reported by
/// name rather than as a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,

    #[serde(default)]
    pub steps: Vec<String>,

    #[serde(default)]
    pub input_text: String,
}

/// Successful run.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunResponse {
    pub result: RunRecord,
}

/// Failed run with the steps that completed before the failure.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFailureResponse {
    pub error: String,
    pub partial_results: RunRecord,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<RunRecord>,
}

/// Query parameters for `GET /api/history`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

/// Body of `POST /api/workflows`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateWorkflowRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkflowResponse {
    pub workflow: WorkflowDefinition,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkflowListResponse {
    pub workflows: Vec<WorkflowDefinition>,
}

/// Query parameters for `DELETE /api/workflows`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteWorkflowQuery {
    pub id: Option<String>,
}

/// One entry of `GET /api/steps`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepInfo {
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub label: String,
    pub description: String,
    pub icon: String,
}

impl From<&StepDescriptor> for StepInfo {
    fn from(descriptor: &StepDescriptor) -> Self {
        Self {
            kind: descriptor.kind,
            label: descriptor.label.to_string(),
            description: descriptor.description.to_string(),
            icon: descriptor.icon.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StepCatalogResponse {
    pub steps: Vec<StepInfo>,
}

/// One entry of `GET /api/templates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateInfo {
    pub name: String,
    pub description: String,
    pub steps: Vec<StepKind>,
    pub icon: String,
}

impl From<&WorkflowTemplate> for TemplateInfo {
    fn from(template: &WorkflowTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            description: template.description.to_string(),
            steps: template.steps.to_vec(),
            icon: template.icon.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateInfo>,
}
