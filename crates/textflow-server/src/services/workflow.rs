//! Workflow service for saved step sequences.

use crate::engine::validation::{parse_steps, validate_name};
use crate::error::{AppError, AppResult};
use crate::models::api::CreateWorkflowRequest;
use crate::models::WorkflowDefinition;
use crate::store::WorkflowStore;

/// Service for workflow definition operations.
#[derive(Clone)]
pub struct WorkflowService {
    store: WorkflowStore,
}

impl WorkflowService {
    /// Create a new workflow service.
    pub fn new(store: WorkflowStore) -> Self {
        Self { store }
    }

    /// Validate and save a definition.
    ///
    /// The name is checked first, then the step count, then each step name.
    pub async fn create(&self, request: CreateWorkflowRequest) -> AppResult<WorkflowDefinition> {
        let name = validate_name(&request.name)?;
        let steps = parse_steps(request.steps.as_slice())?;
        let workflow = self.store.create(&name, &steps).await?;

        tracing::info!(
            workflow_id = %workflow.id,
            name = %workflow.name,
            steps = workflow.steps.len(),
            "Workflow saved"
        );
        Ok(workflow)
    }

    /// All definitions, newest first.
    pub async fn list(&self) -> Vec<WorkflowDefinition> {
        self.store.list().await
    }

    pub async fn get(&self, id: &str) -> AppResult<WorkflowDefinition> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| AppError::NotFound("Workflow not found".to_string()))
    }

    /// Delete a definition. Runs that reference it are left untouched.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.store.delete_by_id(id).await {
            return Err(AppError::NotFound("Workflow not found".to_string()));
        }
        tracing::info!(workflow_id = %id, "Workflow deleted");
        Ok(())
    }
}
