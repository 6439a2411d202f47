// ============================================================
// COERCED VALUES
// ============================================================
// Canonical cell values after type coercion

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A single coerced cell value.
///
/// Serialized untagged so table rows come out as plain JSON scalars
/// (`null`, `true`, `3`, `2.5`, `"2021-04-01T00:00:00"`, `"text"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value (null/undefined input, or a missing column key)
    Null,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Date(NaiveDateTime),
    String(String),
}

impl Value {
    /// Render this value back as raw JSON, the shape the inferencer and
    /// coercer consume. Dates become their canonical ISO string.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Boolean(b) => JsonValue::Bool(*b),
            Value::Integer(i) => JsonValue::from(*i),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Date(d) => JsonValue::String(d.format("%Y-%m-%dT%H:%M:%S").to_string()),
            Value::String(s) => JsonValue::String(s.clone()),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, ""),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Number(n) => write!(f, "{}", n),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%dT%H:%M:%S")),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}
