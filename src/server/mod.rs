//! HTTP layer exposing the check-in API.
//!
//! # Endpoints
//!
//! - `POST /api/reflection` — Mood check-in reflections
//! - `POST /api/quiz`       — PHQ-2 screening
//! - `GET  /api/health`     — Liveness probe

pub mod routes;

pub use routes::{app_router, AppState};
