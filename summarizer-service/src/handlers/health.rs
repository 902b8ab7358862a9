use crate::dtos::HomeResponse;
use crate::services::metrics::get_metrics;
use axum::{http::header, response::IntoResponse, Json};
use serde_json::json;

pub const HOME_MESSAGE: &str = "Summarizer is live and working!";

/// Liveness message for `/home/`.
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: HOME_MESSAGE.to_string(),
    })
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "summarizer-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Prometheus metrics endpoint.
pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        get_metrics(),
    )
}
