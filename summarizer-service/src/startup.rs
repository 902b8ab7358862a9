//! Application startup and lifecycle management.
//!
//! Builds the axum router over [`AppState`] and owns the bound listener, so tests
//! can start the full service on a random port.

use crate::config::SummarizerConfig;
use crate::handlers::{
    health::{health_check, home, metrics_endpoint},
    summaries::{summarize_incidents, summarize_traffic, summarize_weather},
};
use crate::services::providers::gemini::{GeminiConfig, GeminiSummarizer};
use crate::services::Summarizer;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state. Immutable; cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self { summarizer }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/home", get(home))
        .route("/home/", get(home))
        .route("/traffic", post(summarize_traffic))
        .route("/weather", post(summarize_weather))
        .route("/incidents", post(summarize_incidents))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_endpoint))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the Gemini summarizer described by `config`.
    pub async fn build(config: SummarizerConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.model.name.clone(),
            api_base: config.google.api_base.clone(),
            timeout: Duration::from_secs(config.model.request_timeout_secs),
        };
        let summarizer = GeminiSummarizer::new(gemini_config)
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;

        tracing::info!(
            model = %config.model.name,
            timeout_secs = config.model.request_timeout_secs,
            "Initialized Gemini summarizer"
        );

        Self::build_with_summarizer(config, Arc::new(summarizer)).await
    }

    /// Build the application around an already constructed summarizer.
    pub async fn build_with_summarizer(
        config: SummarizerConfig,
        summarizer: Arc<dyn Summarizer>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Summarizer service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(summarizer),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until the process is killed.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_with_shutdown(std::future::pending()).await
    }

    /// Run the application until `signal` resolves, then drain in-flight requests.
    pub async fn run_with_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(signal)
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
