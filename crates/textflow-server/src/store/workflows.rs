//! In-memory workflow definition store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::catalog::StepKind;
use crate::engine::validation::{validate_name, validate_step_count, ValidationError};
use crate::models::{WorkflowDefinition, WorkflowStep};

/// Keyed collection of workflow definitions.
#[derive(Clone, Default)]
pub struct WorkflowStore {
    workflows: Arc<RwLock<Entries>>,
}

#[derive(Default)]
struct Entries {
    by_id: HashMap<String, Entry>,
    next_seq: u64,
}

/// A stored definition with its insertion sequence, which orders
/// definitions created within the same timestamp tick.
struct Entry {
    seq: u64,
    workflow: WorkflowDefinition,
}

impl WorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a new definition.
    pub async fn create(
        &self,
        name: &str,
        steps: &[StepKind],
    ) -> Result<WorkflowDefinition, ValidationError> {
        let name = validate_name(name)?;
        validate_step_count(steps.len())?;

        let workflow = WorkflowDefinition {
            id: Uuid::new_v4().to_string(),
            name,
            steps: steps
                .iter()
                .enumerate()
                .map(|(index, kind)| WorkflowStep {
                    id: Uuid::new_v4().to_string(),
                    kind: *kind,
                    order: index + 1,
                })
                .collect(),
            created_at: Utc::now(),
        };

        self.insert(workflow.clone()).await;
        Ok(workflow)
    }

    async fn insert(&self, workflow: WorkflowDefinition) {
        let mut entries = self.workflows.write().await;
        let seq = entries.next_seq;
        entries.next_seq += 1;
        entries
            .by_id
            .insert(workflow.id.clone(), Entry { seq, workflow });
    }

    /// All definitions, newest first. Definitions sharing a timestamp are
    /// listed in reverse insertion order.
    pub async fn list(&self) -> Vec<WorkflowDefinition> {
        let entries = self.workflows.read().await;
        let mut all: Vec<&Entry> = entries.by_id.values().collect();
        all.sort_by(|a, b| {
            b.workflow
                .created_at
                .cmp(&a.workflow.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        all.into_iter().map(|entry| entry.workflow.clone()).collect()
    }

    pub async fn get(&self, id: &str) -> Option<WorkflowDefinition> {
        self.workflows
            .read()
            .await
            .by_id
            .get(id)
            .map(|entry| entry.workflow.clone())
    }

    /// Remove a definition. Returns whether one existed.
    pub async fn delete_by_id(&self, id: &str) -> bool {
        self.workflows.write().await.by_id.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.workflows.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.workflows.read().await.by_id.is_empty()
    }
}
