//! Configuration module for the Textflow server.
//!
//! This module provides configuration loading from environment variables
//! using the `envy` crate for type-safe environment variable parsing.

mod app;
mod llm;

pub use app::AppConfig;
pub use llm::LlmConfig;
