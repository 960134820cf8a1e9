//! High-level operations behind the check-in API.
//!
//! This module provides the user-facing operations of Mind Oasis: the
//! reflection orchestrator with its fallback tables, and the PHQ-2
//! screening scorer.

pub mod fallback;
pub mod quiz;
pub mod reflect;

// Re-export commonly used types
pub use fallback::{fallback_response, FallbackResponse};
pub use quiz::{score_quiz, QuizResult, QuizSubmission};
pub use reflect::{CheckIn, ReflectionResult, ReflectionService};
