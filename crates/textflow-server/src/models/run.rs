//! Run and step records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::StepKind;

/// Terminal state of a run.
///
/// `Running` is part of the wire format but the executor only ever
/// records `Success` or `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
    Running,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Success => "success",
            RunStatus::Error => "error",
            RunStatus::Running => "running",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trace of one completed step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub step_id: String,
    pub step_type: StepKind,
    pub step_label: String,
    /// 1-based position in the pipeline.
    pub order: usize,
    pub input: String,
    pub output: String,
    pub duration_ms: u64,
}

/// One execution attempt of a pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    pub id: String,
    /// Soft reference to a stored workflow; empty for ad hoc runs.
    #[serde(default)]
    pub workflow_id: String,
    pub workflow_name: String,
    pub input_text: String,
    pub step_outputs: Vec<StepRecord>,
    pub status: RunStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub total_duration_ms: u64,
    pub created_at: DateTime<Utc>,
}

impl RunRecord {
    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }

    /// Output of the last completed step, if any.
    pub fn final_output(&self) -> Option<&str> {
        self.step_outputs.last().map(|step| step.output.as_str())
    }
}
