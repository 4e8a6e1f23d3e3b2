#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use textflow_server::config::AppConfig;
use textflow_server::router::build_router;
use textflow_server::state::AppState;
use textflow_server::transform::{TextTransform, TransformError, TransformHealth};

/// Transform backend with scripted behavior.
///
/// Each call returns `"{input} [call N]"`, except the call numbered
/// `fail_on` (1-based), which fails with `failure`.
pub struct ScriptedTransform {
    calls: AtomicUsize,
    fail_on: Option<usize>,
    failure: String,
    healthy: bool,
}

impl ScriptedTransform {
    pub fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on: None,
            failure: String::new(),
            healthy: true,
        }
    }

    pub fn failing_on(call: usize, message: &str) -> Self {
        Self {
            fail_on: Some(call),
            failure: message.to_string(),
            ..Self::ok()
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            healthy: false,
            ..Self::ok()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextTransform for ScriptedTransform {
    async fn transform(&self, _instruction: &str, input: &str) -> Result<String, TransformError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on == Some(call) {
            return Err(TransformError::Service(self.failure.clone()));
        }
        Ok(format!("{} [call {}]", input, call))
    }

    async fn check_health(&self) -> TransformHealth {
        if self.healthy {
            TransformHealth::healthy("scripted backend ready")
        } else {
            TransformHealth::unhealthy("scripted backend down")
        }
    }
}

/// Build a test `AppConfig` with the given history capacity.
pub fn test_config(history_limit: usize) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        history_limit,
        ..AppConfig::default()
    }
}

/// Build the full application router around the given backend.
pub fn build_test_app(transform: Arc<ScriptedTransform>) -> Router {
    build_test_app_with_capacity(transform, 20)
}

pub fn build_test_app_with_capacity(transform: Arc<ScriptedTransform>, capacity: usize) -> Router {
    let state = AppState::new(test_config(capacity), transform);
    build_router(state)
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// A valid run body for the given steps.
pub fn run_body(steps: &[&str], input_text: &str) -> serde_json::Value {
    serde_json::json!({
        "steps": steps,
        "inputText": input_text,
    })
}
