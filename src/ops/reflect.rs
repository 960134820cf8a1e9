//! Generate reflections for mood check-ins.
//!
//! The orchestrator behind `POST /api/reflection`. It validates the
//! check-in, decides whether a live model call is possible, and degrades
//! through fallback tiers so that every fault past validation still
//! produces a fully populated result.

use crate::ai::openrouter::OpenRouterClient;
use crate::ai::parser::{parse_reflection, ParseOutcome, ParsedReflection};
use crate::ai::prompts::reflection_prompt;
use crate::config::Config;
use crate::constants::RAW_REFLECTION_MAX_CHARS;
use crate::errors::{AppError, AppResult};
use crate::ops::fallback::fallback_response;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// A single mood check-in. Never persisted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckIn {
    /// Self-reported mood keyword.
    pub mood: String,
    /// Free-text journal entry.
    pub entry: String,
}

/// The structured reflection returned for every check-in.
///
/// Always fully populated regardless of which tier produced it;
/// `using_mock` records whether the live model contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionResult {
    /// Empathetic reflection text.
    pub reflection: String,
    /// Suggested action.
    pub suggestion: String,
    /// The mood from the check-in, echoed back.
    pub mood: String,
    /// True when the result came from a fallback tier.
    pub using_mock: bool,
}

/// Generates reflections for mood check-ins.
///
/// Holds its model dependency explicitly: constructing the service without
/// a client is the supported no-credential mode, in which every check-in
/// is answered from the fallback tables.
pub struct ReflectionService {
    client: Option<OpenRouterClient>,
    model: String,
}

impl ReflectionService {
    /// Creates a service with an explicit (possibly absent) model client.
    pub fn new(client: Option<OpenRouterClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Builds the service from configuration: a live client when a usable
    /// credential is present, fallback-only mode otherwise.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = match &config.api_key {
            Some(key) => Some(OpenRouterClient::new(
                &config.base_url,
                key,
                config.model_timeout,
            )?),
            None => None,
        };
        Ok(Self::new(client, &config.model))
    }

    /// Produces a reflection for `check_in`.
    ///
    /// The only error this returns is `AppError::InvalidInput`; every model
    /// or parse fault past validation degrades into an `Ok` result built
    /// from the fallback tables.
    pub async fn generate_reflection(&self, check_in: &CheckIn) -> AppResult<ReflectionResult> {
        if check_in.mood.is_empty() || check_in.entry.is_empty() {
            return Err(AppError::InvalidInput(
                "Missing required fields: mood and entry".to_string(),
            ));
        }

        let request_id = Uuid::new_v4();

        let Some(client) = &self.client else {
            info!(%request_id, mood = %check_in.mood, "no model credential configured, using fallback response");
            return Ok(fallback_result(check_in));
        };

        let messages = reflection_prompt(&check_in.mood, &check_in.entry);
        let raw = match client.chat(&self.model, &messages).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%request_id, error = %err, "model call failed, using fallback response");
                return Ok(fallback_result(check_in));
            }
        };

        match parse_reflection(&raw) {
            ParseOutcome::Parsed(ParsedReflection {
                reflection: Some(reflection),
                suggestion: Some(suggestion),
            }) => {
                debug!(%request_id, "model returned a well-formed reflection");
                Ok(ReflectionResult {
                    reflection,
                    suggestion,
                    mood: check_in.mood.clone(),
                    using_mock: false,
                })
            }
            ParseOutcome::Parsed(partial) => {
                warn!(%request_id, ?partial, "model reflection missing fields, degrading");
                Ok(degraded_result(check_in, &raw))
            }
            ParseOutcome::Failed(reason) => {
                warn!(%request_id, %reason, "model output unparseable, degrading");
                Ok(degraded_result(check_in, &raw))
            }
        }
    }
}

/// Builds a result entirely from the fallback tables.
fn fallback_result(check_in: &CheckIn) -> ReflectionResult {
    let fallback = fallback_response(&check_in.mood);
    ReflectionResult {
        reflection: fallback.reflection,
        suggestion: fallback.suggestion,
        mood: check_in.mood.clone(),
        using_mock: true,
    }
}

/// Keeps what the model did say: a truncated slice of the raw output
/// stands in for the reflection, paired with the fallback suggestion.
fn degraded_result(check_in: &CheckIn, raw: &str) -> ReflectionResult {
    let fallback = fallback_response(&check_in.mood);
    let truncated = truncate_chars(raw, RAW_REFLECTION_MAX_CHARS);
    let reflection = if truncated.is_empty() {
        fallback.reflection
    } else {
        truncated
    };

    ReflectionResult {
        reflection,
        suggestion: fallback.suggestion,
        mood: check_in.mood.clone(),
        using_mock: true,
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_in(mood: &str, entry: &str) -> CheckIn {
        CheckIn {
            mood: mood.to_string(),
            entry: entry.to_string(),
        }
    }

    fn fallback_only_service() -> ReflectionService {
        ReflectionService::new(None, "test-model")
    }

    #[tokio::test]
    async fn test_empty_mood_is_rejected_before_any_tier() {
        let service = fallback_only_service();
        let result = service.generate_reflection(&check_in("", "fine")).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_empty_entry_is_rejected() {
        let service = fallback_only_service();
        let result = service.generate_reflection(&check_in("calm", "")).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_no_client_answers_from_fallback_tables() {
        let service = fallback_only_service();
        let result = service
            .generate_reflection(&check_in("calm", "quiet morning"))
            .await
            .unwrap();

        assert!(result.using_mock);
        assert_eq!(result.mood, "calm");
        assert_eq!(result.reflection, fallback_response("calm").reflection);
        assert_eq!(result.suggestion, fallback_response("calm").suggestion);
    }

    #[tokio::test]
    async fn test_unknown_mood_without_client_echoes_mood_in_template() {
        let service = fallback_only_service();
        let result = service
            .generate_reflection(&check_in("bewildered", "strange day"))
            .await
            .unwrap();

        assert!(result.using_mock);
        assert!(result.reflection.contains("bewildered"));
    }

    #[test]
    fn test_truncate_chars_respects_character_boundaries() {
        let text = "héllo wörld".repeat(40);
        let truncated = truncate_chars(&text, RAW_REFLECTION_MAX_CHARS);
        assert_eq!(truncated.chars().count(), RAW_REFLECTION_MAX_CHARS);

        assert_eq!(truncate_chars("short", RAW_REFLECTION_MAX_CHARS), "short");
        assert_eq!(truncate_chars("", RAW_REFLECTION_MAX_CHARS), "");
    }

    #[test]
    fn test_degraded_result_prefers_raw_text_over_fallback_reflection() {
        let check_in = check_in("sad", "rough week");
        let result = degraded_result(&check_in, "the model rambled instead of answering");

        assert!(result.using_mock);
        assert_eq!(result.reflection, "the model rambled instead of answering");
        assert_eq!(result.suggestion, fallback_response("sad").suggestion);
    }

    #[test]
    fn test_degraded_result_with_empty_raw_uses_fallback_reflection() {
        let check_in = check_in("sad", "rough week");
        let result = degraded_result(&check_in, "");

        assert_eq!(result.reflection, fallback_response("sad").reflection);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = fallback_result(&check_in("calm", "ok"));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["usingMock"], true);
        assert_eq!(value["mood"], "calm");
    }
}
