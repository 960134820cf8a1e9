//! Error handling utilities for Mind Oasis.
//!
//! This module provides the central error type `AppError` which represents
//! the error conditions that can surface to a caller or abort startup, the
//! domain-specific `ModelError` and `QuizError` types, and the convenience
//! alias `AppResult` for functions that can return these errors.
//!
//! The reflection pipeline keeps most faults out of this module: a failed
//! model call or an unparseable completion is an expected condition,
//! absorbed into a fallback result rather than propagated as an error.

use thiserror::Error;

/// Represents error cases that can occur when calling the model provider.
///
/// Each variant captures the failure mode of one stage of the round trip:
/// reaching the provider, the provider's HTTP answer, and the shape of the
/// completion body.
///
/// # Examples
///
/// ```
/// use mind_oasis::errors::ModelError;
///
/// let error = ModelError::Api { status: 429, body: "rate limited".to_string() };
/// assert!(format!("{}", error).contains("429"));
/// ```
#[derive(Debug, Error)]
pub enum ModelError {
    /// The provider could not be reached, or the request timed out.
    #[error("Model provider unreachable: {0}")]
    Offline(#[source] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Model provider returned HTTP {status}: {body}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The provider answered 2xx but the completion body was unusable.
    #[error("Invalid response from model provider: {0}")]
    InvalidResponse(String),
}

/// Represents validation failures when scoring a PHQ-2 submission.
///
/// Quiz scoring has a strict contract: there is no meaningful fallback for
/// a missing score, so malformed input is rejected outright. The display
/// strings are the exact messages surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    /// One or both answers were absent from the submission.
    #[error("Missing required fields: q1 and q2")]
    MissingField,

    /// An answer was present but not parseable as an integer.
    #[error("Invalid scores. Must be numbers.")]
    NotANumber,
}

/// Represents the errors that can surface outside the reflection pipeline.
///
/// This is the central error type used across the application. It uses
/// `thiserror` for deriving the `Error` trait implementation and formatted
/// error messages.
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors, e.g. failing to bind the listen socket.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A check-in with missing or empty required fields.
    ///
    /// The inner string is the caller-facing message surfaced with an
    /// HTTP 400 at the boundary.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
