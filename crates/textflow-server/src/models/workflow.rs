//! Stored workflow definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::StepKind;

/// One step slot in a stored workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub order: usize,
}

/// A named, reusable step sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    pub id: String,
    pub name: String,
    pub steps: Vec<WorkflowStep>,
    pub created_at: DateTime<Utc>,
}

impl WorkflowDefinition {
    /// Step kinds in execution order.
    pub fn step_kinds(&self) -> Vec<StepKind> {
        let mut steps: Vec<&WorkflowStep> = self.steps.iter().collect();
        steps.sort_by_key(|step| step.order);
        steps.into_iter().map(|step| step.kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_kinds_follow_order() {
        let workflow = WorkflowDefinition {
            id: "wf-1".to_string(),
            name: "Example".to_string(),
            steps: vec![
                WorkflowStep {
                    id: "b".to_string(),
                    kind: StepKind::Summarize,
                    order: 2,
                },
                WorkflowStep {
                    id: "a".to_string(),
                    kind: StepKind::CleanText,
                    order: 1,
                },
            ],
            created_at: Utc::now(),
        };

        assert_eq!(
            workflow.step_kinds(),
            vec![StepKind::CleanText, StepKind::Summarize]
        );

        let json = serde_json::to_value(&workflow).unwrap();
        assert_eq!(json["steps"][0]["type"], "SUMMARIZE");
        assert!(json.get("createdAt").is_some());
    }
}
