//! OpenAI-compatible chat completions client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{TextTransform, TransformError, TransformHealth};
use crate::config::LlmConfig;
use crate::result_ext::ResultExt;

/// Chat message sent to the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

impl ChatMessage {
    fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// Trimmed content of the first choice, if it has any.
    fn first_content(&self) -> Option<String> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .map(str::to_string)
    }
}

/// Pull a readable message out of a provider error body.
///
/// Providers answer with either `{"error": "..."}` or
/// `{"error": {"message": "..."}}`; anything else is returned as-is.
fn provider_error_message(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let message = parsed.as_ref().and_then(|value| {
        let error = value.get("error")?;
        error
            .as_str()
            .or_else(|| error.get("message").and_then(|m| m.as_str()))
            .map(str::to_string)
    });

    message.unwrap_or_else(|| body.trim().to_string())
}

/// HTTP client for a hosted chat completions API.
#[derive(Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl LlmClient {
    /// Create a new LLM client.
    pub fn new(config: LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        temperature: Option<f32>,
        max_tokens: u32,
    ) -> Result<String, TransformError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(TransformError::MissingApiKey)?;

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransformError::Timeout(self.config.timeout())
                } else {
                    TransformError::from(e)
                }
            })
            .log("LLM completion request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransformError::Status {
                status: status.as_u16(),
                message: provider_error_message(&body),
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .first_content()
            .ok_or(TransformError::EmptyResponse)
    }
}

#[async_trait]
impl TextTransform for LlmClient {
    async fn transform(&self, instruction: &str, input: &str) -> Result<String, TransformError> {
        debug!(
            model = %self.config.model,
            input_chars = input.chars().count(),
            "Sending transform request"
        );

        self.complete(
            vec![ChatMessage::system(instruction), ChatMessage::user(input)],
            Some(self.config.temperature),
            self.config.max_tokens,
        )
        .await
    }

    async fn check_health(&self) -> TransformHealth {
        if !self.config.has_api_key() {
            return TransformHealth::unhealthy("LLM API key not configured");
        }

        match self
            .complete(vec![ChatMessage::user("Say \"ok\"")], None, 5)
            .await
        {
            Ok(_) => TransformHealth::healthy("LLM API connected and responding"),
            Err(TransformError::EmptyResponse) => {
                TransformHealth::unhealthy("LLM returned empty response")
            }
            Err(e) => TransformHealth::unhealthy(format!("LLM connection failed: {}", e)),
        }
    }
}
