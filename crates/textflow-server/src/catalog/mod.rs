//! Step catalog.
//!
//! The catalog is plain data: every [`StepKind`] maps to one static
//! [`StepDescriptor`] holding its label, icon and the instruction sent to
//! the language model. There is no per-kind behavior beyond that text.

mod steps;
mod templates;

pub use steps::{StepDescriptor, StepKind, UnknownStepKind};
pub use templates::{WorkflowTemplate, TEMPLATES};
