//! Message builders for the reflection pipeline.
//!
//! The prompt instructs the model to answer in strict JSON; the parser
//! downstream is still prepared for it to ignore that instruction.

use super::openrouter::Message;

/// Builds the messages for a mood check-in reflection.
///
/// The single user message carries the mood and journal entry and demands
/// a `{"reflection": "...", "suggestion": "..."}` JSON answer.
pub fn reflection_prompt(mood: &str, entry: &str) -> Vec<Message> {
    vec![Message::user(format!(
        r#"You are a compassionate mental health companion. A user is feeling {mood} and shared: "{entry}"

Provide:
1. A brief, empathetic reflection (2-3 sentences) acknowledging their feelings
2. One specific, actionable suggestion to help them feel better

Respond in JSON format: {{"reflection": "...", "suggestion": "..."}}"#
    ))]
}
