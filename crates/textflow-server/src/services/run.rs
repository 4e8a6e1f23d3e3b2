//! Run service: validates run requests, executes them and serves history.

use crate::engine::validation::{parse_steps, validate_input};
use crate::engine::{PipelineRequest, WorkflowExecutor};
use crate::error::{AppError, AppResult};
use crate::models::api::RunRequest;
use crate::models::RunRecord;
use crate::result_ext::OptionResultExt;
use crate::store::WorkflowStore;

/// Number of runs returned by a history query without a limit.
pub const DEFAULT_HISTORY_QUERY_LIMIT: usize = 5;

/// Service for run operations.
#[derive(Clone)]
pub struct RunService {
    executor: WorkflowExecutor,
    workflows: WorkflowStore,
}

impl RunService {
    /// Create a new run service.
    ///
    /// `workflows` is only read, to resolve the display name of runs that
    /// reference a saved definition.
    pub fn new(executor: WorkflowExecutor, workflows: WorkflowStore) -> Self {
        Self {
            executor,
            workflows,
        }
    }

    /// Validate and execute a run.
    ///
    /// Validation failures are returned as errors and leave no trace in the
    /// history. Once execution starts the result is always a record, whose
    /// status tells whether every step completed.
    pub async fn run(&self, request: RunRequest) -> AppResult<RunRecord> {
        validate_input(&request.input_text)?;
        let steps = parse_steps(request.steps.as_slice())?;

        let workflow_id = request
            .workflow_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty());

        let saved_name = match workflow_id {
            Some(id) => self
                .workflows
                .get(id)
                .await
                .log_none(format!("saved workflow {id} for run"))
                .map(|workflow| workflow.name),
            None => None,
        };

        let name = request
            .workflow_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(saved_name.as_deref());

        let mut pipeline = PipelineRequest::new(steps, &request.input_text, name)?;
        if let Some(id) = workflow_id {
            pipeline = pipeline.with_workflow_id(id);
        }

        Ok(self.executor.execute(&pipeline).await)
    }

    /// Most recent runs, newest first.
    ///
    /// The limit defaults to [`DEFAULT_HISTORY_QUERY_LIMIT`] and is capped at
    /// the history capacity.
    pub async fn history(&self, limit: Option<usize>) -> Vec<RunRecord> {
        let history = self.executor.history();
        let limit = limit
            .unwrap_or(DEFAULT_HISTORY_QUERY_LIMIT)
            .min(history.capacity());
        history.query(limit).await
    }

    /// Get a single run by id.
    pub async fn get(&self, id: &str) -> AppResult<RunRecord> {
        self.executor
            .history()
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Run {} not found", id)))
    }
}
