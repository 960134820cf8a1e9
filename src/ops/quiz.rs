//! PHQ-2 screening scorer.
//!
//! Sums the two screening answers and classifies the total into a
//! severity tier with guidance text. Unlike the reflection pipeline there
//! is no fallback here: a submission that cannot be scored is rejected.

use crate::constants::{PHQ2_MILD_MAX, PHQ2_MINIMAL_MAX, PHQ2_NEEDS_HELP_THRESHOLD};
use crate::errors::QuizError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw PHQ-2 submission as received on the wire.
///
/// The fields stay untyped: clients may send numbers or numeric strings,
/// and anything else must surface as a validation failure rather than a
/// deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuizSubmission {
    /// Answer to "Little interest or pleasure in doing things".
    pub q1: Option<Value>,
    /// Answer to "Feeling down, depressed, or hopeless".
    pub q2: Option<Value>,
}

/// Outcome of scoring a PHQ-2 submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    /// Sum of the two answers.
    pub total_score: i64,
    /// Guidance text for the severity tier.
    pub message: String,
    /// True when the score suggests connecting with a professional.
    pub needs_help: bool,
}

const MINIMAL_MESSAGE: &str = "Your responses suggest minimal symptoms. Continue with self-care and monitoring your mental health.";
const MILD_MESSAGE: &str = "Your responses suggest mild symptoms. Consider speaking with a healthcare provider about your mental health.";
const SIGNIFICANT_MESSAGE: &str = "Your responses suggest more significant symptoms. We recommend connecting with a mental health professional for support.";

/// Coerces a submitted answer into an integer score.
///
/// Accepts JSON integers and strings containing a trimmed integer.
fn coerce_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Scores a PHQ-2 submission into a severity tier.
///
/// The answers are summed as given. The 0-3 per-question range is enforced
/// by the UI only; out-of-range integers pass through unclamped.
///
/// # Errors
///
/// Returns `QuizError::MissingField` if either answer is absent and
/// `QuizError::NotANumber` if either answer is not parseable as an
/// integer.
pub fn score_quiz(submission: &QuizSubmission) -> Result<QuizResult, QuizError> {
    let (Some(q1), Some(q2)) = (&submission.q1, &submission.q2) else {
        return Err(QuizError::MissingField);
    };

    let score1 = coerce_score(q1).ok_or(QuizError::NotANumber)?;
    let score2 = coerce_score(q2).ok_or(QuizError::NotANumber)?;

    let total_score = score1 + score2;
    let message = if total_score <= PHQ2_MINIMAL_MAX {
        MINIMAL_MESSAGE
    } else if total_score <= PHQ2_MILD_MAX {
        MILD_MESSAGE
    } else {
        SIGNIFICANT_MESSAGE
    };

    Ok(QuizResult {
        total_score,
        message: message.to_string(),
        needs_help: total_score >= PHQ2_NEEDS_HELP_THRESHOLD,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(q1: Value, q2: Value) -> QuizSubmission {
        QuizSubmission {
            q1: Some(q1),
            q2: Some(q2),
        }
    }

    #[test]
    fn test_zero_total_is_minimal_and_needs_no_help() {
        let result = score_quiz(&submission(json!(0), json!(0))).unwrap();
        assert_eq!(result.total_score, 0);
        assert_eq!(result.message, MINIMAL_MESSAGE);
        assert!(!result.needs_help);
    }

    #[test]
    fn test_total_of_four_is_mild_and_needs_help() {
        let result = score_quiz(&submission(json!(2), json!(2))).unwrap();
        assert_eq!(result.total_score, 4);
        assert_eq!(result.message, MILD_MESSAGE);
        assert!(result.needs_help);
    }

    #[test]
    fn test_total_of_six_is_significant() {
        let result = score_quiz(&submission(json!(3), json!(3))).unwrap();
        assert_eq!(result.total_score, 6);
        assert_eq!(result.message, SIGNIFICANT_MESSAGE);
        assert!(result.needs_help);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(
            score_quiz(&submission(json!(1), json!(1))).unwrap().message,
            MINIMAL_MESSAGE
        );
        assert_eq!(
            score_quiz(&submission(json!(2), json!(1))).unwrap().message,
            MILD_MESSAGE
        );
        assert_eq!(
            score_quiz(&submission(json!(3), json!(2))).unwrap().message,
            SIGNIFICANT_MESSAGE
        );
        assert!(score_quiz(&submission(json!(2), json!(1))).unwrap().needs_help);
        assert!(!score_quiz(&submission(json!(1), json!(1))).unwrap().needs_help);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let result = score_quiz(&submission(json!("2"), json!(" 1 "))).unwrap();
        assert_eq!(result.total_score, 3);
    }

    #[test]
    fn test_non_numeric_answer_is_rejected() {
        assert_eq!(
            score_quiz(&submission(json!("x"), json!(1))),
            Err(QuizError::NotANumber)
        );
        assert_eq!(
            score_quiz(&submission(json!(true), json!(1))),
            Err(QuizError::NotANumber)
        );
        assert_eq!(
            score_quiz(&submission(json!(2.5), json!(1))),
            Err(QuizError::NotANumber)
        );
    }

    #[test]
    fn test_missing_answers_are_rejected() {
        let missing_q2 = QuizSubmission {
            q1: Some(json!(1)),
            q2: None,
        };
        assert_eq!(score_quiz(&missing_q2), Err(QuizError::MissingField));
        assert_eq!(
            score_quiz(&QuizSubmission::default()),
            Err(QuizError::MissingField)
        );
    }

    #[test]
    fn test_out_of_range_integers_pass_through_unclamped() {
        let result = score_quiz(&submission(json!(10), json!(-1))).unwrap();
        assert_eq!(result.total_score, 9);
        assert_eq!(result.message, SIGNIFICANT_MESSAGE);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = score_quiz(&submission(json!(3), json!(3))).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["totalScore"], 6);
        assert_eq!(value["needsHelp"], true);
    }
}
