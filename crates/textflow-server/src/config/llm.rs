//! Language model provider configuration.

use std::time::Duration;

use serde::Deserialize;

/// LLM settings loaded from environment variables.
///
/// Environment variables are prefixed with `LLM_`:
/// - `LLM_API_KEY`: Bearer token (falls back to `HUGGINGFACE_API_KEY`)
/// - `LLM_BASE_URL`: OpenAI-compatible API root
///   (default: "https://router.huggingface.co/v1")
/// - `LLM_MODEL`: Model identifier (default: "mistralai/Mistral-7B-Instruct-v0.2")
/// - `LLM_TEMPERATURE`: Sampling temperature (default: 0.3)
/// - `LLM_MAX_TOKENS`: Completion token limit (default: 1024)
/// - `LLM_TIMEOUT_SECS`: HTTP request timeout (default: 60)
#[derive(Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://router.huggingface.co/v1".to_string()
}

fn default_model() -> String {
    "mistralai/Mistral-7B-Instruct-v0.2".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_timeout_secs() -> u64 {
    60
}

impl LlmConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `LLM_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        let mut config = envy::prefixed("LLM_").from_env::<LlmConfig>()?;
        if !config.has_api_key() {
            config.api_key = std::env::var("HUGGINGFACE_API_KEY")
                .ok()
                .filter(|key| !key.is_empty());
        }
        Ok(config)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Chat completions endpoint derived from the base URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();
        assert_eq!(config.model, "mistralai/Mistral-7B-Instruct-v0.2");
        assert_eq!(config.max_tokens, 1024);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_completions_url() {
        let config = LlmConfig {
            base_url: "http://localhost:11434/v1/".to_string(),
            ..LlmConfig::default()
        };
        assert_eq!(
            config.completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = LlmConfig {
            api_key: Some("hf_secret".to_string()),
            ..LlmConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hf_secret"));
        assert!(config.has_api_key());
    }
}
