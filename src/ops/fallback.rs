//! Deterministic reflections used when the model path is unavailable.
//!
//! Two parallel keyword tables cover the moods the check-in UI offers.
//! They are indexed independently, so a mood added to one table but not
//! the other gets a custom text on one side and the generic text on the
//! other.

/// A locally computed reflection/suggestion pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackResponse {
    /// Empathetic acknowledgement of the mood.
    pub reflection: String,
    /// One concrete action to try.
    pub suggestion: String,
}

const REFLECTIONS: &[(&str, &str)] = &[
    (
        "calm",
        "It's wonderful that you're feeling calm. This sense of peace is valuable and worth savoring.",
    ),
    (
        "happy",
        "Your happiness is evident in your words. It's great to see you in such a positive state.",
    ),
    (
        "anxious",
        "Thank you for sharing your feelings. Anxiety can be overwhelming, but acknowledging it is an important first step.",
    ),
    (
        "sad",
        "I hear you, and your feelings are valid. It takes courage to express sadness and vulnerability.",
    ),
    (
        "tired",
        "Rest is essential for your well-being. It's okay to acknowledge when you need to recharge.",
    ),
];

const SUGGESTIONS: &[(&str, &str)] = &[
    (
        "calm",
        "Continue what you're doing! Try a short meditation or journaling session to maintain this peace.",
    ),
    (
        "happy",
        "Great! Share your joy with someone or do something creative to extend this positive energy.",
    ),
    (
        "anxious",
        "Try deep breathing exercises (4-7-8 technique) or a short walk outside to help ease your anxiety.",
    ),
    (
        "sad",
        "Be gentle with yourself. Consider reaching out to a friend or doing a comfort activity that brings you solace.",
    ),
    (
        "tired",
        "Rest is important. Try a power nap or some gentle stretching to restore your energy.",
    ),
];

const GENERIC_SUGGESTION: &str = "Take a moment for self-care today.";

fn lookup(table: &[(&str, &str)], mood: &str) -> Option<String> {
    table
        .iter()
        .find(|(key, _)| *key == mood)
        .map(|(_, text)| (*text).to_string())
}

/// Returns a canned reflection/suggestion pair for `mood`.
///
/// Lookup is case-sensitive and exact. Unknown moods, including the empty
/// string, get a generic reflection that interpolates the mood verbatim,
/// and a generic suggestion. Total: never fails, no side effects, no
/// external calls.
pub fn fallback_response(mood: &str) -> FallbackResponse {
    let reflection = lookup(REFLECTIONS, mood).unwrap_or_else(|| {
        format!("Thank you for sharing. When feeling {mood}, it's important to acknowledge your emotions.")
    });
    let suggestion = lookup(SUGGESTIONS, mood).unwrap_or_else(|| GENERIC_SUGGESTION.to_string());

    FallbackResponse {
        reflection,
        suggestion,
    }
}
