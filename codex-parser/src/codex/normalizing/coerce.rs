//! Total conversions from loosely typed yaml values
//!
//!     None of these fail: absent or unusable input returns the caller's fallback.

use crate::codex::parsing::first_signed_int;
use serde_yaml::Value;
use std::fmt::Debug;

/// Numeric conversion with a named fallback. Integers pass through, floats truncate and
/// strings must hold a whole signed integer (`"+5"`, `" -2 "`); anything else falls back.
pub fn to_number(value: Option<&Value>, fallback: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(fallback),
        Some(Value::String(s)) => s.trim().trim_start_matches('+').parse().unwrap_or(fallback),
        Some(Value::Tagged(tagged)) => to_number(Some(&tagged.value), fallback),
        _ => fallback,
    }
}

/// Level: numbers pass through, text yields its first signed integer (`"Creature -1"`).
pub fn to_level(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::String(s)) => first_signed_int(s).unwrap_or(0),
        other => to_number(other, 0),
    }
}

/// Free text. Scalars are stringified, sequences joined with `", "`; blank text is `None`.
pub fn to_text(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Sequence(items) => items
            .iter()
            .filter_map(|item| to_text(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Value::Tagged(tagged) => return to_text(Some(&tagged.value)),
        Value::Null | Value::Mapping(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// A list of strings from either a comma separated string or a sequence.
pub fn to_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::Sequence(items)) => items.iter().filter_map(|i| to_text(Some(i))).collect(),
        Some(Value::Tagged(tagged)) => to_list(Some(&tagged.value)),
        _ => Vec::new(),
    }
}

/// Truthiness for flags: `true`, or the strings `true`, `yes`, `inline`.
pub fn to_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "yes" | "inline"
        ),
        _ => false,
    }
}

/// Enum conversion against an allow-list parser, with a fallback for anything unrecognized.
pub fn to_enum<T: Copy + Debug>(
    value: Option<&Value>,
    parse: fn(&str) -> Option<T>,
    fallback: T,
) -> T {
    let Some(text) = to_text(value) else {
        return fallback;
    };
    parse(&text).unwrap_or_else(|| {
        tracing::debug!(value = %text, ?fallback, "unrecognized value, using fallback");
        fallback
    })
}

/// The string form of a mapping key (`str: 2` and `1st: ...` both have usable keys).
pub fn key_text(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
