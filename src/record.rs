// Record Access Layer
// Reads fields out of untyped JSON records, with lenient scalar coercion

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// RECORD ERROR
// ============================================================================

/// Error returned by the strict `try_from_record` constructors when a
/// required field is missing from a record or has an unusable type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    pub entity: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl RecordError {
    pub(crate) fn missing(entity: &'static str, field: &'static str) -> Self {
        RecordError {
            entity,
            field,
            message: "required field is missing".to_string(),
        }
    }

    pub(crate) fn invalid(entity: &'static str, field: &'static str, expected: &str) -> Self {
        RecordError {
            entity,
            field,
            message: format!("expected {}", expected),
        }
    }
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.entity, self.field, self.message)
    }
}

impl std::error::Error for RecordError {}

// ============================================================================
// SCALAR COERCION
// ============================================================================

/// Coerces a scalar JSON value to text.
///
/// Records in the wild carry house numbers and zip codes both as strings
/// and as bare numbers, so both are accepted. Objects, arrays and null
/// yield `None`.
pub(crate) fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerces a JSON number or numeric string to an integer identifier.
pub(crate) fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ============================================================================
// FIELD ACCESS
// ============================================================================

/// Looks up the first of `keys` present in the record.
///
/// Keys are tried in order; call sites list the camelCase key first and the
/// snake_case variant after it.
pub(crate) fn get<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| record.get(key))
}

/// Lenient text field: missing or non-scalar values become the empty string.
pub(crate) fn text_field(record: &Value, keys: &[&str]) -> String {
    get(record, keys).and_then(coerce_text).unwrap_or_default()
}

/// Lenient optional text field: missing or non-scalar values become `None`.
pub(crate) fn opt_text_field(record: &Value, keys: &[&str]) -> Option<String> {
    get(record, keys).and_then(coerce_text)
}

/// Lenient integer field: missing or non-numeric values become `0`.
pub(crate) fn int_field(record: &Value, keys: &[&str]) -> i64 {
    get(record, keys).and_then(coerce_int).unwrap_or_default()
}

/// Strict text field. `keys[0]` is the field name reported on error.
pub(crate) fn require_text(
    record: &Value,
    entity: &'static str,
    keys: &'static [&'static str],
) -> Result<String, RecordError> {
    match get(record, keys) {
        None => Err(RecordError::missing(entity, keys[0])),
        Some(value) => {
            coerce_text(value).ok_or_else(|| RecordError::invalid(entity, keys[0], "a text value"))
        }
    }
}

/// Strict integer field. `keys[0]` is the field name reported on error.
pub(crate) fn require_int(
    record: &Value,
    entity: &'static str,
    keys: &'static [&'static str],
) -> Result<i64, RecordError> {
    match get(record, keys) {
        None => Err(RecordError::missing(entity, keys[0])),
        Some(value) => {
            coerce_int(value).ok_or_else(|| RecordError::invalid(entity, keys[0], "an integer"))
        }
    }
}

/// Strict nested record field. `keys[0]` is the field name reported on error.
pub(crate) fn require_object<'a>(
    record: &'a Value,
    entity: &'static str,
    keys: &'static [&'static str],
) -> Result<&'a Value, RecordError> {
    match get(record, keys) {
        None => Err(RecordError::missing(entity, keys[0])),
        Some(value) if value.is_object() => Ok(value),
        Some(_) => Err(RecordError::invalid(entity, keys[0], "a nested record")),
    }
}

// ============================================================================
// SERDE GLUE
// ============================================================================

/// Deserializes a string field with scalar coercion, so records carrying
/// numeric house numbers or zip codes still map onto `String` fields.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_text(&value).unwrap_or_default())
}

/// Deserializes an optional string field with scalar coercion.
pub(crate) fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_text(&value))
}

/// Deserializes an integer identifier, accepting numeric strings.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_int(&value).unwrap_or_default())
}

// ============================================================================
// TESTS
// ============================================================================
