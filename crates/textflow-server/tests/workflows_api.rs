//! HTTP-level integration tests for saved workflow endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, ScriptedTransform};
use serde_json::json;

fn app() -> axum::Router {
    common::build_test_app(Arc::new(ScriptedTransform::ok()))
}

async fn create(app: &axum::Router, name: &str, steps: &[&str]) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/api/workflows",
        json!({"name": name, "steps": steps}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["workflow"].clone()
}

#[tokio::test]
async fn create_and_fetch_workflow() {
    let app = app();
    let workflow = create(
        &app,
        "  Deep Insights ",
        &["CLEAN_TEXT", "EXTRACT_KEY_POINTS", "SENTIMENT_ANALYSIS"],
    )
    .await;

    assert_eq!(workflow["name"], "Deep Insights");
    let steps = workflow["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["type"], "CLEAN_TEXT");
    assert_eq!(steps[0]["order"], 1);
    assert_eq!(steps[2]["type"], "SENTIMENT_ANALYSIS");
    assert_eq!(steps[2]["order"], 3);
    assert!(workflow["createdAt"].is_string());

    let id = workflow["id"].as_str().unwrap();
    let response = get(app, &format!("/api/workflows/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["workflow"], workflow);
}

#[tokio::test]
async fn list_workflows() {
    let app = app();
    create(&app, "First", &["CLEAN_TEXT", "SUMMARIZE"]).await;
    create(&app, "Second", &["SUMMARIZE", "TRANSLATE"]).await;

    let json = body_json(get(app, "/api/workflows").await).await;
    let mut names: Vec<&str> = json["workflows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["First", "Second"]);
}

#[tokio::test]
async fn create_rejects_invalid_definitions() {
    let app = app();
    let cases = [
        (
            json!({"name": "  ", "steps": ["CLEAN_TEXT", "SUMMARIZE"]}),
            "Workflow name is required",
        ),
        (
            json!({"steps": ["CLEAN_TEXT", "SUMMARIZE"]}),
            "Workflow name is required",
        ),
        (
            json!({"name": "One", "steps": ["CLEAN_TEXT"]}),
            "Workflow must have between 2 and 4 steps",
        ),
        (
            json!({"name": "Bad", "steps": ["CLEAN_TEXT", "BOGUS"]}),
            "Invalid step type: BOGUS",
        ),
    ];

    for (body, message) in cases {
        let response = post_json(app.clone(), "/api/workflows", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], message);
    }

    let json = body_json(get(app, "/api/workflows").await).await;
    assert!(json["workflows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_by_path_and_query() {
    let app = app();
    let first = create(&app, "First", &["CLEAN_TEXT", "SUMMARIZE"]).await;
    let second = create(&app, "Second", &["SUMMARIZE", "TRANSLATE"]).await;

    let id = first["id"].as_str().unwrap();
    let response = delete(app.clone(), &format!("/api/workflows/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let response = get(app.clone(), &format!("/api/workflows/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let id = second["id"].as_str().unwrap();
    let response = delete(app.clone(), &format!("/api/workflows?id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(app.clone(), &format!("/api/workflows?id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Workflow not found");

    let response = delete(app, "/api/workflows").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Workflow ID is required");
}

#[tokio::test]
async fn deleting_workflow_keeps_its_runs() {
    let app = app();
    let workflow = create(&app, "Digest", &["CLEAN_TEXT", "SUMMARIZE"]).await;
    let id = workflow["id"].as_str().unwrap();

    let response = post_json(
        app.clone(),
        "/api/run",
        json!({
            "workflowId": id,
            "steps": ["CLEAN_TEXT", "SUMMARIZE"],
            "inputText": "Notes from the weekly sync."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    delete(app.clone(), &format!("/api/workflows/{id}")).await;

    let json = body_json(get(app, "/api/history").await).await;
    let runs = json["history"].as_array().unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0]["workflowId"], id);
}
