#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use summarizer_service::services::providers::mock::MockSummarizer;
use summarizer_service::startup::{build_router, AppState};
use tower::ServiceExt;

pub fn router_with(mock: Arc<MockSummarizer>) -> Router {
    build_router(AppState::new(mock))
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    read_json(response).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn traffic_body() -> Value {
    json!({
        "speed": 32.4,
        "speedUncapped": 35.1,
        "freeFlow": 61,
        "jamFactor": 0.4,
        "confidence": 0.8,
        "traversability": "open"
    })
}

pub fn weather_body() -> Value {
    json!({
        "city": "Mumbai",
        "temperature": 29.8,
        "feelsLike": 34.2,
        "minTemperature": 28,
        "maxTemperature": 31,
        "weather": "moderate rain",
        "pressure": 1004,
        "humidity": 88,
        "visibility": 3000,
        "windSpeed": 6.2,
        "windDegree": 250,
        "windGust": 9.8,
        "cloudiness": 90,
        "sunrise": "06:01",
        "sunset": "19:14"
    })
}
