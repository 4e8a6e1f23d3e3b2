//! Route table for the TextFlow API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::engine::WorkflowExecutor;
use crate::handlers;
use crate::services::{RunService, WorkflowService};
use crate::state::AppState;

/// Build the application router with all routes.
///
/// Services are wired from the handles in `state`, so the router and the
/// health endpoint observe the same stores.
pub fn build_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let executor = WorkflowExecutor::new(state.transform.clone(), state.history.clone())
        .with_step_timeout(state.config.step_timeout());
    let run_service = RunService::new(executor, state.workflows.clone());
    let workflow_service = WorkflowService::new(state.workflows.clone());

    // Health check routes
    let health_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/health", get(handlers::api_health))
        .with_state(state);

    // Step catalog and templates
    let catalog_routes = Router::new()
        .route("/api/steps", get(handlers::catalog::list_steps))
        .route("/api/templates", get(handlers::catalog::list_templates));

    // Execution and history routes
    let run_routes = Router::new()
        .route("/api/run", post(handlers::run))
        .route("/api/history", get(handlers::history::list))
        .route("/api/history/{id}", get(handlers::history::get))
        .with_state(run_service);

    // Saved workflow routes
    let workflow_routes = Router::new()
        .route(
            "/api/workflows",
            get(handlers::workflows::list)
                .post(handlers::workflows::create)
                .delete(handlers::workflows::delete_by_query),
        )
        .route(
            "/api/workflows/{id}",
            get(handlers::workflows::get).delete(handlers::workflows::delete),
        )
        .with_state(workflow_service);

    Router::new()
        .merge(health_routes)
        .merge(catalog_routes)
        .merge(run_routes)
        .merge(workflow_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
