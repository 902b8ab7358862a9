//! Router-level tests for the summary endpoints, driven through `oneshot`
//! against the mock summarizer.

mod common;

use axum::http::StatusCode;
use common::{get, post_json, router_with, traffic_body, weather_body};
use serde_json::json;
use std::sync::Arc;
use summarizer_service::services::providers::mock::MockSummarizer;

const MISSING: &str = "Missing one or more required parameters";

#[tokio::test]
async fn home_returns_liveness_message() {
    let app = router_with(Arc::new(MockSummarizer::echo()));

    let (status, body) = get(app, "/home/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Summarizer is live and working!"}));
}

#[tokio::test]
async fn home_ignores_request_body_and_never_calls_model() {
    let mock = Arc::new(MockSummarizer::failing("should not be called"));
    let app = router_with(mock.clone());

    let response = tower::ServiceExt::oneshot(
        app,
        axum::http::Request::builder()
            .uri("/home/")
            .body(axum::body::Body::from("not json at all"))
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(mock.prompts().is_empty());
}

#[tokio::test]
async fn traffic_returns_summary() {
    let mock = Arc::new(MockSummarizer::replying("Traffic is moving steadily."));
    let app = router_with(mock.clone());

    let (status, body) = post_json(app, "/traffic", traffic_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"summary": "Traffic is moving steadily."}));

    let prompts = mock.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("speed = 32.4 km/h."));
    assert!(prompts[0].contains("traversability = open."));
    assert!(prompts[0].contains("jamFactor: This parameter indicates the level of congestion"));
}

#[tokio::test]
async fn traffic_missing_any_field_is_bad_request() {
    for key in [
        "speed",
        "speedUncapped",
        "freeFlow",
        "jamFactor",
        "confidence",
        "traversability",
    ] {
        let mock = Arc::new(MockSummarizer::echo());
        let mut body = traffic_body();
        body.as_object_mut().unwrap().remove(key);

        let (status, body) = post_json(router_with(mock.clone()), "/traffic", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {key}");
        assert_eq!(body["detail"], MISSING);
        assert!(mock.prompts().is_empty(), "model called without {key}");
    }
}

#[tokio::test]
async fn traffic_null_field_is_bad_request() {
    let mut body = traffic_body();
    body["confidence"] = serde_json::Value::Null;

    let (status, body) =
        post_json(router_with(Arc::new(MockSummarizer::echo())), "/traffic", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], MISSING);
}

#[tokio::test]
async fn traffic_wrong_value_type_is_internal_error() {
    let mut body = traffic_body();
    body["speed"] = json!("fast");

    let (status, body) =
        post_json(router_with(Arc::new(MockSummarizer::echo())), "/traffic", body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["detail"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn weather_returns_summary() {
    let mock = Arc::new(MockSummarizer::echo());

    let (status, body) = post_json(router_with(mock.clone()), "/weather", weather_body()).await;

    assert_eq!(status, StatusCode::OK);
    let summary = body["summary"].as_str().unwrap();
    assert!(!summary.is_empty());
    assert!(summary.contains("City: Mumbai"));
    assert!(summary.contains("Sunset: 19:14."));
}

#[tokio::test]
async fn weather_missing_any_field_is_bad_request() {
    let keys: Vec<String> = weather_body().as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys.len(), 15);

    for key in keys {
        let mut body = weather_body();
        body.as_object_mut().unwrap().remove(&key);

        let (status, body) =
            post_json(router_with(Arc::new(MockSummarizer::echo())), "/weather", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {key}");
        assert_eq!(body["detail"], MISSING);
    }
}

#[tokio::test]
async fn weather_null_field_is_bad_request() {
    let mut body = weather_body();
    body["sunset"] = serde_json::Value::Null;

    let (status, body) =
        post_json(router_with(Arc::new(MockSummarizer::echo())), "/weather", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], MISSING);
}

#[tokio::test]
async fn weather_accepts_title_case_feed_keys() {
    let mock = Arc::new(MockSummarizer::echo());
    let body = json!({
        "City": "Oslo",
        "Temperature": -3,
        "Feels Like": -8,
        "Min Temperature": -5,
        "Max Temperature": -1,
        "Weather": "light snow",
        "Pressure": 1021,
        "Humidity": 85,
        "Visibility": 2500,
        "Wind Speed": 4.2,
        "Wind Degree": 10,
        "Wind Gust": 7.9,
        "Cloudiness": 100,
        "Sunrise": "09:05",
        "Sunset": "15:20"
    });

    let (status, body) = post_json(router_with(mock), "/weather", body).await;

    assert_eq!(status, StatusCode::OK);
    let summary = body["summary"].as_str().unwrap();
    assert!(summary.contains("City: Oslo"));
    assert!(summary.contains("Feels Like: -8"));
}

#[tokio::test]
async fn incidents_single_record_renders_expected_lines() {
    let mock = Arc::new(MockSummarizer::replying("One hazard is blocking the road."));
    let body = json!({
        "1": {
            "description": "Tree down",
            "summary": "Road blocked",
            "type": "hazard",
            "criticality": "high",
            "roadClosed": true,
            "startTime": "08:00",
            "endTime": "10:00"
        }
    });

    let (status, response) = post_json(router_with(mock.clone()), "/incidents", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["summary"], "One hazard is blocking the road.");

    let prompt = &mock.prompts()[0];
    assert!(prompt.contains("Incident ID: 1"));
    assert!(prompt.contains("Type: hazard"));
    assert!(prompt.contains("Road Closed: True"));
}

#[tokio::test]
async fn incidents_empty_object_succeeds() {
    let mock = Arc::new(MockSummarizer::replying("No incidents to report."));

    let (status, body) = post_json(router_with(mock.clone()), "/incidents", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "No incidents to report.");
    assert_eq!(mock.prompts().len(), 1);
}

#[tokio::test]
async fn incidents_partial_records_are_not_validated() {
    let mock = Arc::new(MockSummarizer::echo());

    let (status, body) = post_json(
        router_with(mock),
        "/incidents",
        json!({"a": {"summary": "Stalled truck"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let summary = body["summary"].as_str().unwrap();
    assert!(summary.contains("Summary: Stalled truck"));
    assert!(summary.contains("Criticality: None"));
}

#[tokio::test]
async fn incidents_accept_any_value_types() {
    let mock = Arc::new(MockSummarizer::echo());

    let (status, body) = post_json(
        router_with(mock),
        "/incidents",
        json!({"42": {"criticality": 3, "startTime": 1717245000, "roadClosed": "yes"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let summary = body["summary"].as_str().unwrap();
    assert!(summary.contains("Criticality: 3\n"));
    assert!(summary.contains("Road Closed: yes\n"));
    assert!(summary.contains("Start Time: 1717245000\n"));
}

#[tokio::test]
async fn upstream_failure_is_internal_error_with_detail() {
    for (uri, body) in [
        ("/traffic", traffic_body()),
        ("/weather", weather_body()),
        ("/incidents", json!({})),
    ] {
        let app = router_with(Arc::new(MockSummarizer::failing("model unavailable")));

        let (status, body) = post_json(app, uri, body).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.contains("model unavailable"), "{uri}: {detail}");
    }
}

#[tokio::test]
async fn malformed_json_is_internal_error() {
    let app = router_with(Arc::new(MockSummarizer::echo()));

    let response = tower::ServiceExt::oneshot(
        app,
        axum::http::Request::builder()
            .method("POST")
            .uri("/incidents")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn same_input_yields_stable_response_shape() {
    let mock = Arc::new(MockSummarizer::echo());

    for _ in 0..3 {
        let (status, body) = post_json(router_with(mock.clone()), "/traffic", traffic_body()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("summary").is_some());
    }

    let prompts = mock.prompts();
    assert!(prompts.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = router_with(Arc::new(MockSummarizer::echo()));

    let response = tower::ServiceExt::oneshot(
        app,
        axum::http::Request::builder()
            .uri("/home/")
            .header("x-request-id", "req-42")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-42");
}
