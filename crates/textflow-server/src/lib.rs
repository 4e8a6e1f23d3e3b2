//! TextFlow Server Library
//!
//! This crate provides the HTTP server for TextFlow, a small service that
//! runs short linear text-processing pipelines against a hosted language
//! model:
//!
//! - **Step Catalog**: a fixed set of operations (clean, summarize, extract
//!   key points, tag, sentiment, translate) and built-in templates
//! - **Workflow Execution**: 2 to 4 steps run in order, each step's output
//!   feeding the next, with partial progress kept on failure
//! - **Run History**: a bounded, newest-first record of past runs
//! - **Saved Workflows**: named step sequences that can be reused
//!
//! ## Architecture
//!
//! Handlers validate requests through the service layer, the
//! [`engine::WorkflowExecutor`] drives each step through a
//! [`transform::TextTransform`] backend, and every finished run lands in
//! the in-process [`store::RunHistory`]. Nothing is persisted to disk.
//!
//! ## Modules
//!
//! - [`catalog`]: Step kinds, descriptors and templates
//! - [`config`]: Configuration loading from environment variables
//! - [`engine`]: Request validation and the sequential executor
//! - [`error`]: Custom error types with Axum integration
//! - [`handlers`]: HTTP route handlers
//! - [`router`]: Route table
//! - [`store`]: Run history and workflow stores
//! - [`transform`]: Language model client
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use textflow_server::{
//!     config::{AppConfig, LlmConfig},
//!     router::build_router,
//!     state::AppState,
//!     transform::LlmClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let llm = LlmClient::new(LlmConfig::from_env()?);
//!     let state = AppState::new(AppConfig::from_env()?, Arc::new(llm));
//!     let app = build_router(state);
//!     // ... bind and serve
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod models;
pub mod result_ext;
pub mod router;
pub mod services;
pub mod state;
pub mod store;
pub mod transform;

pub use error::{AppError, AppResult};
pub use result_ext::ResultExt;
