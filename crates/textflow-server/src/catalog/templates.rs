//! Built-in pipeline presets.

use serde::Serialize;

use super::StepKind;

/// A named, ready-made step sequence.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub steps: &'static [StepKind],
    pub icon: &'static str,
}

pub static TEMPLATES: [WorkflowTemplate; 4] = [
    WorkflowTemplate {
        name: "Quick Summary",
        description: "Clean and summarize any text quickly",
        steps: &[StepKind::CleanText, StepKind::Summarize],
        icon: "⚡",
    },
    WorkflowTemplate {
        name: "Full Analysis",
        description: "Complete text analysis with summary and key points",
        steps: &[
            StepKind::CleanText,
            StepKind::Summarize,
            StepKind::ExtractKeyPoints,
        ],
        icon: "🔬",
    },
    WorkflowTemplate {
        name: "Content Tagger",
        description: "Clean, summarize, and categorize content",
        steps: &[
            StepKind::CleanText,
            StepKind::Summarize,
            StepKind::TagCategory,
        ],
        icon: "📋",
    },
    WorkflowTemplate {
        name: "Deep Insights",
        description: "Extract key points and analyze sentiment",
        steps: &[
            StepKind::CleanText,
            StepKind::ExtractKeyPoints,
            StepKind::SentimentAnalysis,
            StepKind::TagCategory,
        ],
        icon: "🧠",
    },
];
