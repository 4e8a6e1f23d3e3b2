//! Step kinds and their static descriptors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed text operations a pipeline can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKind {
    #[serde(alias = "clean-text")]
    CleanText,
    #[serde(alias = "summarize")]
    Summarize,
    #[serde(alias = "extract-key-points")]
    ExtractKeyPoints,
    #[serde(alias = "tag-category")]
    TagCategory,
    #[serde(alias = "sentiment-analysis")]
    SentimentAnalysis,
    #[serde(alias = "translate")]
    Translate,
}

/// Static description of a step kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub kind: StepKind,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// System prompt sent to the language model.
    pub instruction: &'static str,
}

const CLEAN_TEXT_INSTRUCTION: &str = "You are a text cleaning assistant. Clean the following text by:
- Removing extra whitespace and blank lines
- Fixing obvious typos and formatting issues
- Normalizing punctuation and capitalization
- Removing any irrelevant artifacts (e.g., HTML tags, special characters)
Return ONLY the cleaned text, nothing else.";

const SUMMARIZE_INSTRUCTION: &str = "You are a summarization assistant. Provide a clear, concise summary of the following text.
The summary should capture the main ideas and be roughly 2-4 sentences.
Return ONLY the summary, nothing else.";

const EXTRACT_KEY_POINTS_INSTRUCTION: &str = "You are a key points extraction assistant. Extract the main key points from the following text.
Return them as a numbered list (1., 2., 3., etc).
Focus on the most important ideas, facts, or arguments.
Return between 3-7 key points. Return ONLY the numbered list, nothing else.";

const TAG_CATEGORY_INSTRUCTION: &str = "You are a text classification assistant. Analyze the following text and assign relevant category tags.
Return 2-5 tags that best describe the content.
Format: Return tags as a comma-separated list, e.g., \"Technology, AI, Business\"
Return ONLY the tags, nothing else.";

const SENTIMENT_ANALYSIS_INSTRUCTION: &str = "You are a sentiment analysis assistant. Analyze the emotional tone of the following text.
Provide:
- Overall sentiment: Positive / Negative / Neutral / Mixed
- Confidence: High / Medium / Low
- Brief explanation (1-2 sentences)
Format your response exactly as:
Sentiment: [sentiment]
Confidence: [confidence]
Explanation: [explanation]";

const TRANSLATE_INSTRUCTION: &str = "You are a translation assistant. If the following text is not in English, translate it to English.
If it is already in English, return it as-is with a note \"(Already in English)\".
Return ONLY the translated text (or original with the note), nothing else.";

/// Descriptor table, indexed by `StepKind as usize`.
static DESCRIPTORS: [StepDescriptor; 6] = [
    StepDescriptor {
        kind: StepKind::CleanText,
        label: "Clean Text",
        description: "Remove extra whitespace, fix formatting, and normalize text",
        icon: "🧹",
        instruction: CLEAN_TEXT_INSTRUCTION,
    },
    StepDescriptor {
        kind: StepKind::Summarize,
        label: "Summarize",
        description: "Generate a concise summary of the text",
        icon: "📝",
        instruction: SUMMARIZE_INSTRUCTION,
    },
    StepDescriptor {
        kind: StepKind::ExtractKeyPoints,
        label: "Extract Key Points",
        description: "Pull out the main ideas and key takeaways",
        icon: "🎯",
        instruction: EXTRACT_KEY_POINTS_INSTRUCTION,
    },
    StepDescriptor {
        kind: StepKind::TagCategory,
        label: "Tag Category",
        description: "Classify the text into relevant categories",
        icon: "🏷️",
        instruction: TAG_CATEGORY_INSTRUCTION,
    },
    StepDescriptor {
        kind: StepKind::SentimentAnalysis,
        label: "Sentiment Analysis",
        description: "Analyze the emotional tone and sentiment",
        icon: "💭",
        instruction: SENTIMENT_ANALYSIS_INSTRUCTION,
    },
    StepDescriptor {
        kind: StepKind::Translate,
        label: "Translate",
        description: "Translate the text to English (if not already)",
        icon: "🌐",
        instruction: TRANSLATE_INSTRUCTION,
    },
];

impl StepKind {
    /// Every step kind, in catalog order.
    pub const ALL: [StepKind; 6] = [
        StepKind::CleanText,
        StepKind::Summarize,
        StepKind::ExtractKeyPoints,
        StepKind::TagCategory,
        StepKind::SentimentAnalysis,
        StepKind::Translate,
    ];

    pub fn descriptor(self) -> &'static StepDescriptor {
        &DESCRIPTORS[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub fn instruction(self) -> &'static str {
        self.descriptor().instruction
    }

    /// Wire identifier, e.g. `CLEAN_TEXT`.
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::CleanText => "CLEAN_TEXT",
            StepKind::Summarize => "SUMMARIZE",
            StepKind::ExtractKeyPoints => "EXTRACT_KEY_POINTS",
            StepKind::TagCategory => "TAG_CATEGORY",
            StepKind::SentimentAnalysis => "SENTIMENT_ANALYSIS",
            StepKind::Translate => "TRANSLATE",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no step kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid step type: {0}")]
pub struct UnknownStepKind(pub String);

impl FromStr for StepKind {
    type Err = UnknownStepKind;

    /// Accepts both `CLEAN_TEXT` and `clean-text`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        StepKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| UnknownStepKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_matches_kinds() {
        for kind in StepKind::ALL {
            assert_eq!(kind.descriptor().kind, kind);
            assert!(!kind.instruction().is_empty());
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(StepKind::Summarize.label(), "Summarize");
        assert_eq!(StepKind::ExtractKeyPoints.label(), "Extract Key Points");
    }

    #[test]
    fn test_from_str_accepts_both_spellings() {
        assert_eq!("CLEAN_TEXT".parse::<StepKind>(), Ok(StepKind::CleanText));
        assert_eq!("clean-text".parse::<StepKind>(), Ok(StepKind::CleanText));
        assert_eq!(
            "sentiment-analysis".parse::<StepKind>(),
            Ok(StepKind::SentimentAnalysis)
        );
        assert_eq!(
            "rewrite".parse::<StepKind>(),
            Err(UnknownStepKind("rewrite".to_string()))
        );
    }

    #[test]
    fn test_serde_wire_format() {
        let json = serde_json::to_string(&StepKind::TagCategory).unwrap();
        assert_eq!(json, "\"TAG_CATEGORY\"");

        let kind: StepKind = serde_json::from_str("\"tag-category\"").unwrap();
        assert_eq!(kind, StepKind::TagCategory);
    }
}
