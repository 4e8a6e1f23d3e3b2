//! Service layer for the TextFlow server.
//!
//! Services own request validation and coordinate between handlers,
//! the executor and the in-process stores.

pub mod run;
pub mod workflow;

pub use run::{RunService, DEFAULT_HISTORY_QUERY_LIMIT};
pub use workflow::WorkflowService;
