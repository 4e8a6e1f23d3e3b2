//! HTTP client for the Textflow server API.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

/// A run spans up to four model calls, so the timeout is generous.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Body of `POST /api/run`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    pub steps: Vec<String>,
    pub input_text: String,
}

/// Client for the Textflow server.
pub struct TextflowClient {
    client: reqwest::Client,
    server_url: String,
}

impl TextflowClient {
    pub fn new(server_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;
        read_json(response).await
    }

    pub async fn health(&self) -> Result<Value> {
        let url = self.url("/api/health");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        // 503 still carries the health report.
        if response.status() == StatusCode::SERVICE_UNAVAILABLE {
            return Ok(response.json().await?);
        }
        read_json(response).await
    }

    pub async fn steps(&self) -> Result<Value> {
        self.get_json("/api/steps").await
    }

    pub async fn templates(&self) -> Result<Value> {
        self.get_json("/api/templates").await
    }

    /// Step identifiers of the named template (case-insensitive).
    pub async fn template_steps(&self, name: &str) -> Result<(String, Vec<String>)> {
        let templates = self.templates().await?;
        find_template(&templates, name)
            .with_context(|| format!("Template '{}' not found", name))
    }

    /// Run a pipeline.
    ///
    /// Returns the run record for both complete and failed runs; a failed run
    /// carries `status: "error"` and the steps that completed.
    pub async fn run(&self, payload: &RunPayload) -> Result<Value> {
        let url = self.url("/api/run");
        tracing::debug!(url = %url, steps = ?payload.steps, "POST");
        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        if response.status() == StatusCode::BAD_GATEWAY {
            let body: Value = response.json().await?;
            return Ok(body["partialResults"].clone());
        }

        let body = read_json(response).await?;
        Ok(body["result"].clone())
    }

    pub async fn history(&self, limit: Option<usize>) -> Result<Value> {
        match limit {
            Some(limit) => self.get_json(&format!("/api/history?limit={}", limit)).await,
            None => self.get_json("/api/history").await,
        }
    }

    pub async fn run_detail(&self, id: &str) -> Result<Value> {
        self.get_json(&format!("/api/history/{}", id)).await
    }

    pub async fn workflows(&self) -> Result<Value> {
        self.get_json("/api/workflows").await
    }

    pub async fn create_workflow(&self, name: &str, steps: &[String]) -> Result<Value> {
        let url = self.url("/api/workflows");
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "name": name, "steps": steps }))
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;
        let body = read_json(response).await?;
        Ok(body["workflow"].clone())
    }

    pub async fn delete_workflow(&self, id: &str) -> Result<()> {
        let url = self.url(&format!("/api/workflows/{}", id));
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;
        read_json(response).await?;
        Ok(())
    }
}

/// Decode a success body, or turn an error body into an error.
async fn read_json(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .context("Server returned an invalid JSON body");
    }

    let text = response.text().await.unwrap_or_default();
    bail!("{}", error_message(status, &text))
}

/// Prefer the server's `error` field over the raw body.
pub fn error_message(status: StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    if message.is_empty() {
        format!("Server returned {}", status)
    } else {
        format!("Server returned {}: {}", status, message)
    }
}

fn find_template(templates: &Value, name: &str) -> Option<(String, Vec<String>)> {
    let template = templates["templates"]
        .as_array()?
        .iter()
        .find(|t| {
            t["name"]
                .as_str()
                .is_some_and(|n| n.eq_ignore_ascii_case(name.trim()))
        })?;

    let steps = template["steps"]
        .as_array()?
        .iter()
        .filter_map(|s| s.as_str().map(str::to_string))
        .collect();
    Some((template["name"].as_str()?.to_string(), steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_url_is_trimmed() {
        let client = TextflowClient::new("http://localhost:8090/");
        assert_eq!(client.server_url(), "http://localhost:8090");
        assert_eq!(client.url("/api/steps"), "http://localhost:8090/api/steps");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(
                StatusCode::BAD_REQUEST,
                r#"{"error": "Workflow must have between 2 and 4 steps", "status": 400}"#
            ),
            "Server returned 400 Bad Request: Workflow must have between 2 and 4 steps"
        );
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, "Not Found\n"),
            "Server returned 404 Not Found: Not Found"
        );
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Server returned 500 Internal Server Error"
        );
    }

    #[test]
    fn test_run_payload_wire_shape() {
        let payload = RunPayload {
            workflow_name: None,
            workflow_id: None,
            steps: vec!["CLEAN_TEXT".to_string(), "SUMMARIZE".to_string()],
            input_text: "Some input text".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["inputText"], "Some input text");
        assert!(json.get("workflowName").is_none());
    }

    #[test]
    fn test_find_template() {
        let templates = serde_json::json!({
            "templates": [
                {"name": "Quick Summary", "steps": ["CLEAN_TEXT", "SUMMARIZE"]},
                {"name": "Content Tagger", "steps": ["SUMMARIZE", "TAG_CATEGORY"]}
            ]
        });

        let (name, steps) = find_template(&templates, "content tagger").unwrap();
        assert_eq!(name, "Content Tagger");
        assert_eq!(steps, vec!["SUMMARIZE", "TAG_CATEGORY"]);
        assert!(find_template(&templates, "missing").is_none());
    }
}
