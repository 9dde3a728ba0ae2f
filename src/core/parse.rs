use crate::utils::error::{FillError, Result};
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("fence pattern compiles")
    })
}

/// Pull the payload out of a markdown-fenced block when the model wrapped
/// its answer; otherwise the trimmed text is the payload.
pub fn extract_payload(text: &str) -> &str {
    if let Some(captures) = fence_regex().captures(text) {
        if let Some(inner) = captures.get(1) {
            return inner.as_str().trim();
        }
    }
    text.trim()
}

/// Parse a fill response into one string value per field, in field order.
///
/// An object maps each field name to its value; missing or null entries
/// become the empty string. An array maps positionally and must carry
/// exactly one value per field, anything else aborts the group before any
/// value is applied. Any other JSON shape is a malformed response.
pub fn parse_fill_response(raw: &str, names: &[String]) -> Result<Vec<String>> {
    let payload = extract_payload(raw);
    let parsed: Value =
        serde_json::from_str(payload).map_err(|e| FillError::MalformedResponse {
            message: format!("invalid JSON: {}", e),
        })?;

    match parsed {
        Value::Object(map) => Ok(names
            .iter()
            .map(|name| map.get(name).map(coerce_value).unwrap_or_default())
            .collect()),
        Value::Array(items) => {
            if items.len() != names.len() {
                return Err(FillError::CountMismatch {
                    expected: names.len(),
                    got: items.len(),
                });
            }
            Ok(items.iter().map(coerce_value).collect())
        }
        _ => Err(FillError::MalformedResponse {
            message: "response must be a JSON object mapping field names to string values"
                .to_string(),
        }),
    }
}

/// Parse a fix response: strictly a JSON object mapping failing field
/// names to corrected values. Null entries are dropped (no correction for
/// that field), everything else is coerced to a string.
pub fn parse_fix_response(raw: &str) -> Result<BTreeMap<String, String>> {
    let payload = extract_payload(raw);
    let parsed: Value =
        serde_json::from_str(payload).map_err(|e| FillError::MalformedResponse {
            message: format!("invalid JSON: {}", e),
        })?;

    match parsed {
        Value::Object(map) => Ok(map
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (key.clone(), coerce_value(value)))
            .collect()),
        _ => Err(FillError::MalformedResponse {
            message: "fix response must be a JSON object keyed by field names".to_string(),
        }),
    }
}

fn coerce_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
