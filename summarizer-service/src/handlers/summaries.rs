//! Summary endpoints: validate, render the prompt, ask the model.

use crate::dtos::{
    IncidentSet, SummaryResponse, TrafficReading, TrafficRequest, WeatherReading, WeatherRequest,
};
use crate::handlers::extract::ApiJson;
use crate::prompts::{render_incidents_prompt, render_traffic_prompt, render_weather_prompt};
use crate::services::metrics;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use std::time::Instant;
use validator::ValidationErrors;

#[tracing::instrument(skip_all)]
pub async fn summarize_traffic(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TrafficRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    let reading = TrafficReading::try_from(request).map_err(|e| rejected("traffic", e))?;
    let prompt = render_traffic_prompt(&reading);

    summarize(&state, "traffic", &prompt).await
}

#[tracing::instrument(skip_all)]
pub async fn summarize_weather(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<WeatherRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    let reading = WeatherReading::try_from(request).map_err(|e| rejected("weather", e))?;
    let prompt = render_weather_prompt(&reading);

    summarize(&state, "weather", &prompt).await
}

/// No validation here: incomplete records are rendered with placeholders.
#[tracing::instrument(skip_all)]
pub async fn summarize_incidents(
    State(state): State<AppState>,
    ApiJson(incidents): ApiJson<IncidentSet>,
) -> Result<Json<SummaryResponse>, AppError> {
    tracing::debug!(incidents = incidents.len(), "Rendering incident prompt");
    let prompt = render_incidents_prompt(&incidents);

    summarize(&state, "incidents", &prompt).await
}

fn rejected(endpoint: &str, errors: ValidationErrors) -> AppError {
    let missing: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
    tracing::warn!(endpoint, ?missing, "Missing required parameters");
    metrics::record_summary(endpoint, "invalid");

    AppError::ValidationError(errors)
}

async fn summarize(
    state: &AppState,
    endpoint: &str,
    prompt: &str,
) -> Result<Json<SummaryResponse>, AppError> {
    let model = state.summarizer.model();
    let started = Instant::now();

    let result = state.summarizer.summarize(prompt).await;

    let elapsed = started.elapsed();
    metrics::observe_upstream(endpoint, model, elapsed.as_secs_f64());

    match result {
        Ok(summary) => {
            metrics::record_summary(endpoint, "ok");
            tracing::info!(
                endpoint,
                model,
                prompt_len = prompt.len(),
                summary_len = summary.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "Summary generated"
            );
            Ok(Json(SummaryResponse { summary }))
        }
        Err(e) => {
            metrics::record_summary(endpoint, "failed");
            Err(AppError::InternalError(anyhow::Error::new(e)))
        }
    }
}
