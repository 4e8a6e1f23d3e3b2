//! Pipeline execution engine.
//!
//! - **Validation**: request preconditions checked before anything runs
//! - **Executor**: the sequential step loop that produces run records

pub mod executor;
pub mod validation;

pub use executor::{StepFailure, WorkflowExecutor, DEFAULT_STEP_TIMEOUT};
pub use validation::{PipelineRequest, ValidationError};
