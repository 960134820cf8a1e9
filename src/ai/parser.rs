//! Extracts a structured reflection from free-form model output.
//!
//! Models asked for strict JSON still wrap it in markdown fences, prepend
//! prose, or ignore the instruction entirely. The parser classifies one
//! raw blob in a single pass; every failure is an ordinary value, because
//! the orchestrator treats malformed output as a normal case, not an
//! exceptional one.

use serde_json::Value;
use thiserror::Error;

/// Fields recovered from a decoded model answer.
///
/// A key that is absent or not a string stays `None`; the orchestrator
/// decides whether a partial record is usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReflection {
    /// Value of the `reflection` key, when present and a string.
    pub reflection: Option<String>,
    /// Value of the `suggestion` key, when present and a string.
    pub suggestion: Option<String>,
}

/// Why a raw blob produced no usable record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// Neither a fenced JSON block nor a brace-delimited slice was found.
    #[error("no JSON object found in model output")]
    NoJsonFound,

    /// A candidate was found but did not decode as JSON.
    #[error("candidate JSON failed to decode: {0}")]
    Decode(String),

    /// The candidate decoded, but to something other than an object.
    #[error("decoded JSON is not an object")]
    NotAnObject,
}

/// Classification of one raw model answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// A JSON object was decoded; fields may still be missing.
    Parsed(ParsedReflection),
    /// No usable object; the reason is carried for logging.
    Failed(ParseFailure),
}

/// Parses raw model output into a structured reflection.
///
/// Candidate selection, in order of preference:
///
/// 1. The body of a ` ```json ` fenced code block.
/// 2. Otherwise the slice from the first `{` to the last `}`.
///
/// Exactly one candidate is decoded. A fence that fails to decode is a
/// failure even if a brace slice also exists.
pub fn parse_reflection(raw: &str) -> ParseOutcome {
    let Some(candidate) = json_candidate(raw) else {
        return ParseOutcome::Failed(ParseFailure::NoJsonFound);
    };

    let value: Value = match serde_json::from_str(candidate.trim()) {
        Ok(value) => value,
        Err(e) => return ParseOutcome::Failed(ParseFailure::Decode(e.to_string())),
    };

    let Value::Object(map) = value else {
        return ParseOutcome::Failed(ParseFailure::NotAnObject);
    };

    let field = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);

    ParseOutcome::Parsed(ParsedReflection {
        reflection: field("reflection"),
        suggestion: field("suggestion"),
    })
}

/// Picks the single decode candidate from `raw`.
///
/// An opening fence without a closing fence is ignored and the brace scan
/// runs instead.
fn json_candidate(raw: &str) -> Option<&str> {
    if let Some(start) = raw.find("```json") {
        let body = &raw[start + "```json".len()..];
        if let Some(end) = body.find("```") {
            return Some(&body[..end]);
        }
    }

    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}
