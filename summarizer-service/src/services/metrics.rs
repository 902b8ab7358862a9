//! Prometheus metrics for summarizer-service.
//!
//! HTTP request metrics come from `service_core::middleware::metrics` through the
//! `metrics` recorder; summary-level counters live in a dedicated registry.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use service_core::error::AppError;
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub static SUMMARIES_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static UPSTREAM_DURATION_SECONDS: OnceLock<HistogramVec> = OnceLock::new();

/// Initialize all metrics. Call once at startup; tests run without it.
pub fn init_metrics() -> Result<(), AppError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {}", e))?;

    let registry = Registry::new();
    let (summaries, upstream_duration) = summary_collectors().map_err(anyhow::Error::new)?;

    registry
        .register(Box::new(summaries.clone()))
        .map_err(anyhow::Error::new)?;
    registry
        .register(Box::new(upstream_duration.clone()))
        .map_err(anyhow::Error::new)?;

    let _ = METRICS_HANDLE.set(handle);
    let _ = REGISTRY.set(registry);
    let _ = SUMMARIES_TOTAL.set(summaries);
    let _ = UPSTREAM_DURATION_SECONDS.set(upstream_duration);

    tracing::info!("Prometheus metrics initialized");
    Ok(())
}

/// `summaries_total{endpoint,outcome}` and
/// `summarizer_upstream_duration_seconds{endpoint,model}`.
fn summary_collectors() -> Result<(IntCounterVec, HistogramVec), prometheus::Error> {
    // outcome: ok, invalid, failed
    let summaries = IntCounterVec::new(
        Opts::new("summaries_total", "Summary requests by endpoint and outcome"),
        &["endpoint", "outcome"],
    )?;

    let upstream_duration = HistogramVec::new(
        HistogramOpts::new(
            "summarizer_upstream_duration_seconds",
            "Time spent waiting for the summarization model",
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0, 120.0]),
        &["endpoint", "model"],
    )?;

    Ok((summaries, upstream_duration))
}

/// Count one finished summary request.
pub fn record_summary(endpoint: &str, outcome: &str) {
    if let Some(counter) = SUMMARIES_TOTAL.get() {
        counter.with_label_values(&[endpoint, outcome]).inc();
    }
}

/// Record how long the model took to answer.
pub fn observe_upstream(endpoint: &str, model: &str, seconds: f64) {
    if let Some(histogram) = UPSTREAM_DURATION_SECONDS.get() {
        histogram.with_label_values(&[endpoint, model]).observe(seconds);
    }
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    if let Some(registry) = REGISTRY.get() {
        let mut buffer = Vec::new();
        if let Err(e) = TextEncoder::new().encode(&registry.gather(), &mut buffer) {
            tracing::error!(error = %e, "Failed to encode metrics");
        } else if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}
