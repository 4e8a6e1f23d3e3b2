//! Request validation for pipeline runs and workflow definitions.
//!
//! [`PipelineRequest`] can only be built through [`PipelineRequest::new`],
//! so the executor never sees input that breaks the length or step bounds.

use thiserror::Error;

use crate::catalog::StepKind;

/// Minimum number of steps in a pipeline.
pub const MIN_STEPS: usize = 2;

/// Maximum number of steps in a pipeline.
pub const MAX_STEPS: usize = 4;

/// Minimum trimmed input length, in characters.
pub const MIN_INPUT_CHARS: usize = 10;

/// Display name used when a run has none.
pub const DEFAULT_WORKFLOW_NAME: &str = "Custom Workflow";

/// Rejections raised before any step runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Input text is required and cannot be empty")]
    EmptyInput,

    #[error("Input text must be at least 10 characters long")]
    InputTooShort { length: usize },

    #[error("Workflow must have between 2 and 4 steps")]
    StepCount { count: usize },

    #[error("Invalid step type: {0}")]
    UnknownStep(String),

    #[error("Workflow name is required")]
    EmptyName,
}

/// A validated run request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRequest {
    steps: Vec<StepKind>,
    input_text: String,
    workflow_name: String,
    workflow_id: String,
}

impl PipelineRequest {
    /// Validate and normalize a run request.
    ///
    /// The input is trimmed; internal whitespace is kept verbatim.
    pub fn new(
        steps: Vec<StepKind>,
        input_text: &str,
        workflow_name: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let input_text = validate_input(input_text)?;
        validate_step_count(steps.len())?;

        let workflow_name = workflow_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_WORKFLOW_NAME)
            .to_string();

        Ok(Self {
            steps,
            input_text,
            workflow_name,
            workflow_id: String::new(),
        })
    }

    /// Attach the id of the stored workflow this run came from.
    pub fn with_workflow_id(mut self, workflow_id: impl Into<String>) -> Self {
        self.workflow_id = workflow_id.into();
        self
    }

    pub fn steps(&self) -> &[StepKind] {
        &self.steps
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    pub fn workflow_id(&self) -> &str {
        &self.workflow_id
    }
}

/// Trim the input and check its length.
pub fn validate_input(input_text: &str) -> Result<String, ValidationError> {
    let trimmed = input_text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let length = trimmed.chars().count();
    if length < MIN_INPUT_CHARS {
        return Err(ValidationError::InputTooShort { length });
    }

    Ok(trimmed.to_string())
}

pub fn validate_step_count(count: usize) -> Result<(), ValidationError> {
    if !(MIN_STEPS..=MAX_STEPS).contains(&count) {
        return Err(ValidationError::StepCount { count });
    }
    Ok(())
}

/// Check the step bounds, then parse raw step identifiers.
pub fn parse_steps<S: AsRef<str>>(raw: &[S]) -> Result<Vec<StepKind>, ValidationError> {
    validate_step_count(raw.len())?;
    raw.iter()
        .map(|step| {
            step.as_ref()
                .parse::<StepKind>()
                .map_err(|e| ValidationError::UnknownStep(e.0))
        })
        .collect()
}

/// Trim a workflow name and reject blank names.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_is_trimmed_but_internal_spacing_kept() {
        let request = PipelineRequest::new(
            vec![StepKind::CleanText, StepKind::Summarize],
            "   This   is   a   test   input with   enough length.   ",
            None,
        )
        .unwrap();

        assert_eq!(
            request.input_text(),
            "This   is   a   test   input with   enough length."
        );
        assert_eq!(request.workflow_name(), DEFAULT_WORKFLOW_NAME);
        assert_eq!(request.workflow_id(), "");
    }

    #[test]
    fn test_single_step_rejected() {
        let err = PipelineRequest::new(
            vec![StepKind::CleanText],
            "long enough input text",
            None,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::StepCount { count: 1 });
        assert_eq!(err.to_string(), "Workflow must have between 2 and 4 steps");
    }

    #[test]
    fn test_five_steps_rejected() {
        let steps = vec![StepKind::CleanText; 5];
        let err = PipelineRequest::new(steps, "long enough input text", None).unwrap_err();
        assert_eq!(err, ValidationError::StepCount { count: 5 });
    }

    #[test]
    fn test_short_input_rejected() {
        let err = PipelineRequest::new(
            vec![StepKind::CleanText, StepKind::Summarize],
            "short",
            None,
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::InputTooShort { length: 5 });
        assert_eq!(
            err.to_string(),
            "Input text must be at least 10 characters long"
        );
    }

    #[test]
    fn test_whitespace_only_input_rejected() {
        assert_eq!(validate_input("   \n\t "), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_input_length_counts_characters() {
        // Ten multi-byte characters pass even though the byte length differs.
        assert!(validate_input("éééééééééé").is_ok());
    }

    #[test]
    fn test_parse_steps() {
        let steps = parse_steps(&["CLEAN_TEXT", "summarize"]).unwrap();
        assert_eq!(steps, vec![StepKind::CleanText, StepKind::Summarize]);

        let err = parse_steps(&["CLEAN_TEXT", "REWRITE"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid step type: REWRITE");

        let err = parse_steps(&["REWRITE"]).unwrap_err();
        assert_eq!(err, ValidationError::StepCount { count: 1 });
    }

    #[test]
    fn test_blank_name_falls_back_to_default() {
        let request = PipelineRequest::new(
            vec![StepKind::CleanText, StepKind::Translate],
            "long enough input text",
            Some("   "),
        )
        .unwrap()
        .with_workflow_id("wf-1");
        assert_eq!(request.workflow_name(), DEFAULT_WORKFLOW_NAME);
        assert_eq!(request.workflow_id(), "wf-1");
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  My flow "), Ok("My flow".to_string()));
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
    }
}
