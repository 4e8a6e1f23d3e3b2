//! Application state for the TextFlow server.
//!
//! This module defines the shared application state that is
//! passed to the health handlers via Axum's state management.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::{RunHistory, WorkflowStore};
use crate::transform::TextTransform;

/// Shared application state.
///
/// Holds handles to the stores and the transform backend. Cloning is cheap;
/// every clone sees the same stores.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Bounded run history
    pub history: RunHistory,

    /// Saved workflow definitions
    pub workflows: WorkflowStore,

    /// Backend used for every step
    pub transform: Arc<dyn TextTransform>,

    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The run history is sized from `config.history_limit`.
    pub fn new(config: AppConfig, transform: Arc<dyn TextTransform>) -> Self {
        let history = RunHistory::new(config.history_limit);
        Self {
            config: Arc::new(config),
            history,
            workflows: WorkflowStore::new(),
            transform,
            start_time: std::time::Instant::now(),
        }
    }

    /// Get the server uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
