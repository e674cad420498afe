use serde_json::Value;

/// Payload the API sends as the last message of a stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Best-effort JSON decode.
///
/// Input that looks like an object or array is parsed; anything else, or
/// anything that fails to parse, comes back unchanged as a JSON string.
pub fn decode(raw: &str) -> Value {
    if raw.starts_with('{') || raw.starts_with('[') {
        if let Ok(value) = serde_json::from_str(raw) {
            return value;
        }
    }
    Value::String(raw.to_string())
}

pub fn is_done(event: &Value) -> bool {
    event.as_str() == Some(DONE_SENTINEL)
}

/// The first non-empty `finish_reason` among the event's choices.
pub fn finish_reason(event: &Value) -> Option<&str> {
    event
        .get("choices")
        .and_then(|c| c.as_array())?
        .iter()
        .filter_map(|choice| choice.get("finish_reason").and_then(|r| r.as_str()))
        .find(|reason| !reason.is_empty())
}

/// Extract the content delta from a streamed chat completion event
pub fn delta_content(event: &Value) -> Option<&str> {
    event
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("delta"))
        .and_then(|delta| delta.get("content"))
        .and_then(|content| content.as_str())
}

/// Extract content from a non-streaming chat completion
pub fn message_content(response: &Value) -> Option<&str> {
    response
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
}

/// Model identifiers from a `v1/models` body, either the bare list or the
/// `{"data": [...]}` envelope.
pub fn model_ids(response: &Value) -> Vec<&str> {
    let entries = match response {
        Value::Array(entries) => Some(entries),
        other => other.get("data").and_then(|d| d.as_array()),
    };

    entries
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("id").and_then(|id| id.as_str()))
                .collect()
        })
        .unwrap_or_default()
}
