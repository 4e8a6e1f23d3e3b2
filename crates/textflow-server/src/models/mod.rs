//! Records produced and stored by the server, plus the HTTP bodies that
//! carry them.

pub mod api;
pub mod run;
pub mod workflow;

pub use run::{RunRecord, RunStatus, StepRecord};
pub use workflow::{WorkflowDefinition, WorkflowStep};
