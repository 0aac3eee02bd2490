//! Scalar typing rules shared by the projector and the reconstructor.

use regex::Regex;
use serde_yaml::{Number, Value};
use std::sync::OnceLock;

/// Leading markers that make a single-line cell worth parsing as YAML.
const STRUCTURED_PREFIXES: [&str; 5] = ["[", "{", "- ", "|", ">"];

fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also accept other Unicode digits.
    PATTERN.get_or_init(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap())
}

/// Whether trimmed cell text should be handed to the YAML parser.
#[must_use]
pub fn looks_structured(trimmed: &str) -> bool {
    trimmed.contains('\n') || STRUCTURED_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}

/// `true` / `false`, spelled exactly.
#[must_use]
pub fn parse_boolean(trimmed: &str) -> Option<bool> {
    match trimmed {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Integer or decimal text: optional `-`, digits, optional `.digits`.
///
/// Integers that fit neither `i64` nor `u64` become floats.
#[must_use]
pub fn parse_numeric(trimmed: &str) -> Option<Number> {
    if !numeric_pattern().is_match(trimmed) {
        return None;
    }
    if !trimmed.contains('.') {
        if let Ok(int) = trimmed.parse::<i64>() {
            return Some(Number::from(int));
        }
        if let Ok(int) = trimmed.parse::<u64>() {
            return Some(Number::from(int));
        }
    }
    trimmed.parse::<f64>().ok().map(Number::from)
}

/// Text of a number that [`parse_numeric`] reads back to the same value.
///
/// Finite floats are written in positional notation and always carry a
/// fraction, so `1e16` becomes `10000000000000000.0`. NaN and infinities
/// keep their YAML spelling.
#[must_use]
pub fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float.is_finite() => {
            let text = format!("{float}");
            if text.contains('.') { text } else { format!("{text}.0") }
        }
        _ => number.to_string(),
    }
}

/// Canonical text of a scalar, or `None` for collections and tagged values.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_text(n)),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// Short name of a value's kind, for messages and reports.
#[must_use]
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
