// ============================================================
// TABLE ASSEMBLER
// ============================================================
// Package raw row objects into a named, typed table

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::domain::column::Column;
use crate::domain::naming::sanitize_object_names;
use crate::domain::semantic_type::{coerce_values, infer_type};
use crate::domain::table::{DataTable, TableDerive};
use crate::domain::value::Value;
use crate::domain::{RawRow, RawValue};

/// Assemble a typed table from raw row objects.
///
/// Column names come from the first row's key set (sanitized); values are
/// gathered per column down all rows (a missing key reads as null), the
/// column type is inferred, and every value is coerced to it. Zero rows
/// produce a table with empty name/type/row lists.
pub fn assemble_table(
    title: &str,
    values: &[RawRow],
    anchored: bool,
    derive: Option<TableDerive>,
) -> DataTable {
    let names: Vec<String> = values
        .first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();
    let clean_names = sanitize_object_names(&names);

    // Raw values are gathered under the original keys; output records are
    // keyed by the sanitized names.
    let mut columns: Vec<Column> = Vec::with_capacity(names.len());
    for name in &names {
        let raw: Vec<RawValue> = values
            .iter()
            .map(|row| row.get(name).cloned().unwrap_or(JsonValue::Null))
            .collect();
        let semantic_type = infer_type(&raw);
        columns.push(Column::new(coerce_values(&raw, semantic_type), semantic_type));
    }

    let rows: Vec<HashMap<String, Value>> = (0..values.len())
        .map(|r| {
            clean_names
                .iter()
                .zip(columns.iter())
                .map(|(name, column)| {
                    (
                        name.clone(),
                        column.get(r).cloned().unwrap_or(Value::Null),
                    )
                })
                .collect()
        })
        .collect();

    DataTable {
        id: title.to_string(),
        display_id: title.to_string(),
        names: clean_names,
        types: columns.iter().map(|c| c.semantic_type()).collect(),
        rows,
        derive,
        anchored,
    }
}
