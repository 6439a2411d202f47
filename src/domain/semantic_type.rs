// ============================================================
// SEMANTIC TYPES
// ============================================================
// Type inference and coercion for table columns

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::value::Value;

/// Semantic type of a table column, ordered from most to least restrictive.
///
/// A raw value may satisfy several type predicates ("3" is a valid Integer,
/// Number, and String); a column is assigned the most restrictive type that
/// every one of its non-null values satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemanticType {
    Boolean,
    Integer,
    Date,
    Number,
    String,
}

/// Candidate order for inference: most restrictive first, `String` last as
/// the always-valid fallback.
const CANDIDATE_ORDER: [SemanticType; 5] = [
    SemanticType::Boolean,
    SemanticType::Integer,
    SemanticType::Date,
    SemanticType::Number,
    SemanticType::String,
];

/// Date formats the `Date` predicate recognizes, tried in order.
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%d %b %Y",
    "%B %d, %Y",
];

impl SemanticType {
    /// Validity predicate: does `value` belong to this type's domain?
    ///
    /// Nulls are not tested here; the inferencer skips them. `String`
    /// accepts everything, so narrowing can never empty the candidate list.
    pub fn accepts(&self, value: &JsonValue) -> bool {
        match self {
            SemanticType::Boolean => parse_boolean(value).is_some(),
            SemanticType::Integer => parse_integer(value).is_some(),
            SemanticType::Date => parse_date(value).is_some(),
            SemanticType::Number => parse_number(value).is_some(),
            SemanticType::String => true,
        }
    }

    /// Convert a raw value to its canonical form for this type.
    ///
    /// Total over the type's accepted domain: any value that passed
    /// `accepts` coerces without failure. Null input (and any value outside
    /// the accepted domain) becomes `Value::Null`.
    pub fn coerce(&self, value: &JsonValue) -> Value {
        if value.is_null() {
            return Value::Null;
        }
        match self {
            SemanticType::Boolean => parse_boolean(value).map_or(Value::Null, Value::Boolean),
            SemanticType::Integer => parse_integer(value).map_or(Value::Null, Value::Integer),
            SemanticType::Date => parse_date(value).map_or(Value::Null, Value::Date),
            SemanticType::Number => parse_number(value).map_or(Value::Null, Value::Number),
            SemanticType::String => Value::String(render_string(value)),
        }
    }

    /// Field kind for the visualization grammar.
    pub fn dtype(&self) -> &'static str {
        match self {
            SemanticType::Integer | SemanticType::Number => "quantitative",
            SemanticType::Boolean => "boolean",
            SemanticType::Date => "date",
            SemanticType::String => "nominal",
        }
    }
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SemanticType::Boolean => write!(f, "boolean"),
            SemanticType::Integer => write!(f, "integer"),
            SemanticType::Date => write!(f, "date"),
            SemanticType::Number => write!(f, "number"),
            SemanticType::String => write!(f, "string"),
        }
    }
}

/// Infer the semantic type of a column from its raw values.
///
/// Starts with the full candidate list and removes every candidate some
/// non-null value fails. Equivalent to intersecting per-value admissible
/// type sets across the column and picking the survivor with the highest
/// priority. Nulls never narrow, so an all-null column infers as the most
/// restrictive candidate, `Boolean`.
pub fn infer_type(values: &[JsonValue]) -> SemanticType {
    let mut candidates: Vec<SemanticType> = CANDIDATE_ORDER.to_vec();

    for value in values {
        if value.is_null() {
            continue;
        }
        candidates.retain(|t| t.accepts(value));
    }

    // `String` accepts everything, so the list is never empty.
    candidates.first().copied().unwrap_or(SemanticType::String)
}

/// Coerce a whole column to `semantic_type`, producing a new value array.
pub fn coerce_values(values: &[JsonValue], semantic_type: SemanticType) -> Vec<Value> {
    values.iter().map(|v| semantic_type.coerce(v)).collect()
}

fn parse_boolean(value: &JsonValue) -> Option<bool> {
    match value {
        JsonValue::Bool(b) => Some(*b),
        JsonValue::String(s) => {
            let trimmed = s.trim();
            if trimmed.eq_ignore_ascii_case("true") {
                Some(true)
            } else if trimmed.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn parse_integer(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            // Whole-valued floats (e.g. workbook cells decoded as 3.0)
            let f = n.as_f64()?;
            if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                Some(f as i64)
            } else {
                None
            }
        }
        // Strings with a fractional or exponent component fail the i64 parse
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn parse_number(value: &JsonValue) -> Option<f64> {
    match value {
        JsonValue::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        JsonValue::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Parse a calendar date or datetime. Purely numeric strings are not
/// dates; they belong to the numeric types.
fn parse_date(value: &JsonValue) -> Option<NaiveDateTime> {
    let s = value.as_str()?.trim();
    if s.is_empty() || s.parse::<f64>().is_ok() {
        return None;
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, format) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

fn render_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(values: &[&str]) -> Vec<JsonValue> {
        values.iter().map(|v| json!(v)).collect()
    }

    #[test]
    fn test_integer_column() {
        assert_eq!(infer_type(&strings(&["1", "2", "3"])), SemanticType::Integer);
    }

    #[test]
    fn test_number_column() {
        assert_eq!(
            infer_type(&strings(&["1", "2.5", "3"])),
            SemanticType::Number
        );
    }

    #[test]
    fn test_string_column() {
        assert_eq!(
            infer_type(&strings(&["1", "abc", "3"])),
            SemanticType::String
        );
    }

    #[test]
    fn test_boolean_column() {
        assert_eq!(
            infer_type(&strings(&["true", "FALSE", "true"])),
            SemanticType::Boolean
        );
        assert_eq!(
            infer_type(&[json!(true), json!(false)]),
            SemanticType::Boolean
        );
    }

    #[test]
    fn test_date_column() {
        assert_eq!(
            infer_type(&strings(&["2021-04-01", "2021-04-02"])),
            SemanticType::Date
        );
        assert_eq!(
            infer_type(&strings(&["04/01/2021", "2021-04-02"])),
            SemanticType::Date
        );
    }

    #[test]
    fn test_all_null_column_infers_boolean() {
        // Nulls never narrow the candidate list, so the most restrictive
        // candidate survives. Observable behavior, kept as is.
        assert_eq!(
            infer_type(&[JsonValue::Null, JsonValue::Null]),
            SemanticType::Boolean
        );
    }

    #[test]
    fn test_nulls_are_skipped_during_narrowing() {
        assert_eq!(
            infer_type(&[json!("1"), JsonValue::Null, json!("3")]),
            SemanticType::Integer
        );
    }

    #[test]
    fn test_typed_json_values() {
        assert_eq!(infer_type(&[json!(1), json!(2)]), SemanticType::Integer);
        assert_eq!(infer_type(&[json!(1.5), json!(2)]), SemanticType::Number);
        // Whole-valued floats count as integers
        assert_eq!(infer_type(&[json!(1.0), json!(2.0)]), SemanticType::Integer);
    }

    #[test]
    fn test_exponent_strings_are_not_integers() {
        assert_eq!(infer_type(&strings(&["1e3", "2e3"])), SemanticType::Number);
    }

    #[test]
    fn test_coerce_boolean() {
        assert_eq!(
            SemanticType::Boolean.coerce(&json!("true")),
            Value::Boolean(true)
        );
        assert_eq!(
            SemanticType::Boolean.coerce(&json!(false)),
            Value::Boolean(false)
        );
        assert_eq!(SemanticType::Boolean.coerce(&JsonValue::Null), Value::Null);
    }

    #[test]
    fn test_coerce_integer_and_number() {
        assert_eq!(
            SemanticType::Integer.coerce(&json!("42")),
            Value::Integer(42)
        );
        assert_eq!(
            SemanticType::Number.coerce(&json!("2.5")),
            Value::Number(2.5)
        );
    }

    #[test]
    fn test_coerce_date() {
        let coerced = SemanticType::Date.coerce(&json!("2021-04-01"));
        match coerced {
            Value::Date(d) => {
                assert_eq!(d.format("%Y-%m-%dT%H:%M:%S").to_string(), "2021-04-01T00:00:00")
            }
            other => panic!("expected date, got {:?}", other),
        }
    }

    #[test]
    fn test_coerce_string_renders_scalars() {
        assert_eq!(
            SemanticType::String.coerce(&json!(3)),
            Value::String("3".to_string())
        );
        assert_eq!(
            SemanticType::String.coerce(&json!("abc")),
            Value::String("abc".to_string())
        );
    }

    #[test]
    fn test_inferred_type_is_fixed_point_under_coercion() {
        let columns: Vec<Vec<JsonValue>> = vec![
            strings(&["1", "2", "3"]),
            strings(&["1", "2.5", "3"]),
            strings(&["true", "false"]),
            strings(&["2021-04-01", "04/02/2021"]),
            strings(&["1", "abc", "3"]),
            vec![JsonValue::Null, JsonValue::Null],
        ];

        for raw in columns {
            let inferred = infer_type(&raw);
            let coerced = coerce_values(&raw, inferred);
            let reencoded: Vec<JsonValue> = coerced.iter().map(|v| v.to_json()).collect();
            assert_eq!(infer_type(&reencoded), inferred);
        }
    }

    #[test]
    fn test_dtype_mapping() {
        assert_eq!(SemanticType::Integer.dtype(), "quantitative");
        assert_eq!(SemanticType::Number.dtype(), "quantitative");
        assert_eq!(SemanticType::Boolean.dtype(), "boolean");
        assert_eq!(SemanticType::Date.dtype(), "date");
        assert_eq!(SemanticType::String.dtype(), "nominal");
    }
}
