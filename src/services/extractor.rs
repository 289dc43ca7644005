// src/services/extractor.rs
use serde_json::Value;

pub const EXTRACTION_FAILED: &str = "Could not extract message from response.";

type Accessor = fn(&Value) -> Option<&Value>;

/// Candidate locations of the reply text, highest priority first.
const CANDIDATES: &[Accessor] = &[chat_message, result_text, artifact_message, result, response];

fn chat_message(v: &Value) -> Option<&Value> {
    v.pointer("/outputs/0/outputs/0/messages/0/message")
}

fn result_text(v: &Value) -> Option<&Value> {
    v.pointer("/outputs/0/outputs/0/results/message/text")
}

fn artifact_message(v: &Value) -> Option<&Value> {
    v.pointer("/outputs/0/outputs/0/artifacts/message")
}

fn result(v: &Value) -> Option<&Value> {
    v.get("result")
}

fn response(v: &Value) -> Option<&Value> {
    v.get("response")
}

/// Pull a displayable message out of a Langflow response of unknown shape.
///
/// A bare JSON string is returned as is. Otherwise the first candidate that is
/// present and truthy wins: strings are returned directly, anything else is
/// serialized back to JSON. `null`, `false`, `0` and `""` count as absent, so
/// an empty message at a higher-priority path falls through to the next one.
pub fn extract_message(data: &Value) -> String {
    if let Value::String(s) = data {
        return s.clone();
    }

    CANDIDATES
        .iter()
        .filter_map(|accessor| accessor(data))
        .find(|candidate| is_truthy(candidate))
        .map(render)
        .unwrap_or_else(|| EXTRACTION_FAILED.to_string())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
