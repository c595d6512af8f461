//! Two-stage parsing of model replies.
//!
//! Stage 1 parses the whole body as JSON. Stage 2 takes the text from the first `{` to the
//! last `}` and parses that. The resulting value is read field by field; partial answers
//! never fail.

use crate::domain::{NameAnalysis, UpstreamError};
use serde_json::Value;

/// Parse a model reply body into a JSON value.
///
/// Returns `InvalidJson` when a `{...}` substring exists but does not parse, and
/// `InvalidResponse` when there is nothing object-like in the text at all.
pub fn parse_reply(text: &str) -> Result<Value, UpstreamError> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }
    let Some(candidate) = embedded_object(text) else {
        return Err(UpstreamError::InvalidResponse);
    };
    serde_json::from_str(candidate).map_err(|_| UpstreamError::InvalidJson)
}

/// Slice from the first `{` to the last `}` inclusive, if both exist in that order.
fn embedded_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Read the three result fields from a parsed reply.
///
/// Strings are taken as-is, `null` and missing keys become `None`, other scalars are kept as
/// their JSON text. A non-object value yields an empty analysis.
pub fn analysis_from_value(value: &Value) -> NameAnalysis {
    let field = |key: &str| match value.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };
    NameAnalysis {
        gender: field("gender"),
        full_name: field("full_name"),
        corrected_input: field("corrected_input"),
    }
}

/// Parse a reply body into an analysis.
///
/// Ollama's `/api/chat` wraps the model text in `{"message": {"content": ...}}`. When the
/// top-level object carries none of the result fields, the message content is parsed the same
/// way; an unparseable content yields an empty analysis rather than an error.
pub fn analysis_from_reply(text: &str) -> Result<NameAnalysis, UpstreamError> {
    let value = parse_reply(text)?;
    let analysis = analysis_from_value(&value);
    if !analysis.is_empty() {
        return Ok(analysis);
    }
    let content = value
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str);
    Ok(content
        .and_then(|c| parse_reply(c).ok())
        .map(|inner| analysis_from_value(&inner))
        .unwrap_or(analysis))
}
