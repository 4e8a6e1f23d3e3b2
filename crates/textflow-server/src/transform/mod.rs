//! Text transform client.
//!
//! The executor talks to the language model only through the
//! [`TextTransform`] trait: one instruction plus one input text in, one
//! transformed text out. [`LlmClient`] is the production implementation.

mod error;
mod llm;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use error::TransformError;
pub use llm::LlmClient;

/// Health report for a transform backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformHealth {
    pub healthy: bool,
    pub message: String,
}

impl TransformHealth {
    pub fn healthy(message: impl Into<String>) -> Self {
        Self {
            healthy: true,
            message: message.into(),
        }
    }

    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            healthy: false,
            message: message.into(),
        }
    }
}

/// A backend that rewrites text according to an instruction.
#[async_trait]
pub trait TextTransform: Send + Sync {
    /// Apply `instruction` to `input` and return the transformed text.
    async fn transform(&self, instruction: &str, input: &str) -> Result<String, TransformError>;

    /// Probe the backend. Never fails; problems are reported in the result.
    async fn check_health(&self) -> TransformHealth {
        TransformHealth::healthy("ok")
    }
}
