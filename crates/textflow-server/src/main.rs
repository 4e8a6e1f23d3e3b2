//! TextFlow Server
//!
//! Serves the TextFlow API: run text-processing pipelines against a hosted
//! language model and browse the history of past runs.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use textflow_server::{
    config::{AppConfig, LlmConfig},
    router::build_router,
    state::AppState,
    transform::LlmClient,
};

/// Initialize tracing/logging.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,textflow_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting TextFlow server"
    );

    let app_config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load app config, using defaults");
        AppConfig::default()
    });

    let llm_config = LlmConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load LLM config, using defaults");
        LlmConfig::default()
    });

    if !llm_config.has_api_key() {
        tracing::warn!("No LLM API key configured; every run will fail until one is set");
    }

    tracing::info!(
        host = %app_config.host,
        port = app_config.port,
        debug = app_config.debug,
        history_limit = app_config.history_limit,
        step_timeout_secs = app_config.step_timeout().as_secs(),
        model = %llm_config.model,
        "Configuration loaded"
    );

    let addr: SocketAddr = app_config.bind_address().parse()?;

    let transform = Arc::new(LlmClient::new(llm_config));
    let state = AppState::new(app_config, transform);
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %addr, "Server listening");

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
