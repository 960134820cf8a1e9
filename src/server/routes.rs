//! Axum route handlers for the Mind Oasis HTTP server.
//!
//! # Routes
//!
//! - `POST /api/reflection` — Generate a reflection for a mood check-in
//! - `POST /api/quiz`       — Score a PHQ-2 submission
//! - `GET  /api/health`     — Liveness probe
//!
//! All responses share the `{success, ...payload, error?}` envelope.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::errors::AppError;
use crate::ops::quiz::{score_quiz, QuizSubmission};
use crate::ops::reflect::{CheckIn, ReflectionService};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Reflection orchestrator shared across requests.
    pub service: Arc<ReflectionService>,
}

impl AppState {
    pub fn new(service: ReflectionService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/reflection", post(reflection_handler))
        .route("/api/quiz", post(quiz_handler))
        .route("/api/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Spreads a payload into the success envelope.
fn success_body<T: Serialize>(payload: &T) -> Json<Value> {
    let mut body = json!({ "success": true });
    if let (Value::Object(envelope), Ok(Value::Object(fields))) =
        (&mut body, serde_json::to_value(payload))
    {
        envelope.extend(fields);
    }
    Json(body)
}

fn error_body(message: &str) -> Json<Value> {
    Json(json!({ "success": false, "error": message }))
}

/// POST /api/reflection — generate a reflection for a mood check-in.
///
/// Invalid input is the only 400; every internal fault is already
/// absorbed by the service into a degraded 200.
async fn reflection_handler(
    State(state): State<AppState>,
    Json(check_in): Json<CheckIn>,
) -> impl IntoResponse {
    match state.service.generate_reflection(&check_in).await {
        Ok(result) => (StatusCode::OK, success_body(&result)),
        Err(AppError::InvalidInput(message)) => (StatusCode::BAD_REQUEST, error_body(&message)),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body(&err.to_string()),
        ),
    }
}

/// POST /api/quiz — score a PHQ-2 submission.
async fn quiz_handler(Json(submission): Json<QuizSubmission>) -> impl IntoResponse {
    match score_quiz(&submission) {
        Ok(result) => (StatusCode::OK, success_body(&result)),
        Err(err) => (StatusCode::BAD_REQUEST, error_body(&err.to_string())),
    }
}

/// GET /api/health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "status": "ok",
        "message": "Mind Oasis API is running",
    }))
}
