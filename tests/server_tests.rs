//! Router-level tests: status codes and the response envelope.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; the
//! reflection service runs in fallback-only mode so no network is
//! involved.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use mind_oasis::ops::fallback::fallback_response;
use mind_oasis::ops::reflect::ReflectionService;
use mind_oasis::server::{app_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    let service = ReflectionService::new(None, "test-model");
    app_router(AppState::new(service))
}

async fn response_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

#[tokio::test]
async fn health_reports_ok() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn reflection_rejects_empty_mood_with_400() {
    let request = post_json("/api/reflection", json!({ "mood": "", "entry": "fine" }));
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required fields: mood and entry");
}

#[tokio::test]
async fn reflection_rejects_absent_fields_with_400() {
    let request = post_json("/api/reflection", json!({ "mood": "calm" }));
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn reflection_without_model_returns_fallback_envelope() {
    let request = post_json(
        "/api/reflection",
        json!({ "mood": "calm", "entry": "quiet morning" }),
    );
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["usingMock"], true);
    assert_eq!(body["mood"], "calm");
    assert_eq!(
        body["reflection"].as_str().unwrap(),
        fallback_response("calm").reflection
    );
    assert_eq!(
        body["suggestion"].as_str().unwrap(),
        fallback_response("calm").suggestion
    );
}

#[tokio::test]
async fn quiz_scores_and_classifies() {
    let request = post_json("/api/quiz", json!({ "q1": 2, "q2": 2 }));
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["totalScore"], 4);
    assert_eq!(body["needsHelp"], true);
    assert!(body["message"].as_str().unwrap().contains("mild"));
}

#[tokio::test]
async fn quiz_accepts_numeric_strings() {
    let request = post_json("/api/quiz", json!({ "q1": "0", "q2": "1" }));
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["totalScore"], 1);
    assert_eq!(body["needsHelp"], false);
}

#[tokio::test]
async fn quiz_rejects_non_numeric_scores_with_400() {
    let request = post_json("/api/quiz", json!({ "q1": "x", "q2": 1 }));
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid scores. Must be numbers.");
}

#[tokio::test]
async fn quiz_rejects_missing_answers_with_400() {
    let request = post_json("/api/quiz", json!({ "q1": 1 }));
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing required fields: q1 and q2");
}
