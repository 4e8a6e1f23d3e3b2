//! Sequential pipeline executor.
//!
//! Runs the steps of a [`PipelineRequest`] one after another, feeding each
//! step's output to the next step as its only input. The first failing step
//! ends the run; the steps that completed before it are kept on the record.
//! Every run, successful or not, is appended to the history exactly once.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::StepKind;
use crate::models::{RunRecord, RunStatus, StepRecord};
use crate::store::RunHistory;
use crate::transform::{TextTransform, TransformError};

use super::validation::PipelineRequest;

/// Default upper bound on a single step.
pub const DEFAULT_STEP_TIMEOUT: Duration = Duration::from_secs(60);

/// A step that did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    /// 1-based position of the failing step.
    pub order: usize,
    pub kind: StepKind,
    pub error: TransformError,
}

impl StepFailure {
    /// Message recorded on the run, e.g. `Step 2 (Summarize) failed: rate limited`.
    pub fn message(&self) -> String {
        format!(
            "Step {} ({}) failed: {}",
            self.order,
            self.kind.label(),
            self.error
        )
    }
}

/// Drives pipelines against a transform backend.
#[derive(Clone)]
pub struct WorkflowExecutor {
    transform: Arc<dyn TextTransform>,
    history: RunHistory,
    step_timeout: Duration,
}

impl WorkflowExecutor {
    pub fn new(transform: Arc<dyn TextTransform>, history: RunHistory) -> Self {
        Self {
            transform,
            history,
            step_timeout: DEFAULT_STEP_TIMEOUT,
        }
    }

    pub fn with_step_timeout(mut self, step_timeout: Duration) -> Self {
        self.step_timeout = step_timeout;
        self
    }

    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Execute a validated pipeline and record the outcome.
    ///
    /// Never fails: a step failure is reported as a record with
    /// [`RunStatus::Error`] holding the completed prefix.
    pub async fn execute(&self, request: &PipelineRequest) -> RunRecord {
        let run_id = Uuid::new_v4().to_string();
        let started = Instant::now();

        info!(
            run_id = %run_id,
            workflow = %request.workflow_name(),
            steps = request.steps().len(),
            "Starting run"
        );

        let mut step_outputs = Vec::with_capacity(request.steps().len());
        let mut failure = None;
        let mut current_input = request.input_text().to_string();

        for (index, kind) in request.steps().iter().copied().enumerate() {
            match self.run_step(index + 1, kind, &current_input).await {
                Ok(step) => {
                    current_input = step.output.clone();
                    step_outputs.push(step);
                }
                Err(step_failure) => {
                    failure = Some(step_failure);
                    break;
                }
            }
        }

        let (status, error) = match failure {
            Some(step_failure) => {
                let message = step_failure.message();
                warn!(run_id = %run_id, error = %message, "Run failed");
                (RunStatus::Error, Some(message))
            }
            None => (RunStatus::Success, None),
        };

        let record = RunRecord {
            id: run_id,
            workflow_id: request.workflow_id().to_string(),
            workflow_name: request.workflow_name().to_string(),
            input_text: request.input_text().to_string(),
            step_outputs,
            status,
            error,
            total_duration_ms: elapsed_ms(started),
            created_at: Utc::now(),
        };

        info!(
            run_id = %record.id,
            status = %record.status,
            completed_steps = record.step_outputs.len(),
            duration_ms = record.total_duration_ms,
            "Run finished"
        );

        self.history.append(record.clone()).await;
        record
    }

    /// Run one step, bounded by the step timeout.
    async fn run_step(
        &self,
        order: usize,
        kind: StepKind,
        input: &str,
    ) -> Result<StepRecord, StepFailure> {
        let started = Instant::now();
        debug!(order, step = %kind, "Running step");

        let result = tokio::time::timeout(
            self.step_timeout,
            self.transform.transform(kind.instruction(), input),
        )
        .await
        .unwrap_or_else(|_| Err(TransformError::Timeout(self.step_timeout)));

        match result {
            Ok(output) => {
                let duration_ms = elapsed_ms(started);
                debug!(order, step = %kind, duration_ms, "Step completed");
                Ok(StepRecord {
                    step_id: Uuid::new_v4().to_string(),
                    step_type: kind,
                    step_label: kind.label().to_string(),
                    order,
                    input: input.to_string(),
                    output,
                    duration_ms,
                })
            }
            Err(error) => Err(StepFailure { order, kind, error }),
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
