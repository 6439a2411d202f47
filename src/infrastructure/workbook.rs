// ============================================================
// WORKBOOK READER
// ============================================================
// Decode spreadsheet binaries into per-sheet row-object collections

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};
use serde_json::Value as JsonValue;

use crate::domain::error::IngestError;
use crate::domain::naming::resolve_duplicate_names;
use crate::domain::{RawRow, RawValue};

/// Decode a workbook buffer into `(sheet_name, rows)` pairs, in workbook
/// sheet order. The first row of each sheet is its header; data cells are
/// keyed by the (de-duplicated) header names. Fully empty rows are
/// skipped; an empty sheet yields an empty row collection.
pub fn read_workbook_sheets(buffer: &[u8]) -> Result<Vec<(String, Vec<RawRow>)>, IngestError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(buffer))
        .map_err(|e| IngestError::DecodeError(format!("Failed to open workbook: {}", e)))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_owned();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in sheet_names {
        let range = workbook.worksheet_range(&name).map_err(|e| {
            IngestError::DecodeError(format!("Failed to read sheet '{}': {}", name, e))
        })?;

        sheets.push((name, rows_from_range(&range)));
    }

    Ok(sheets)
}

fn rows_from_range(range: &calamine::Range<Data>) -> Vec<RawRow> {
    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(header_row) => resolve_duplicate_names(
            &header_row
                .iter()
                .map(|cell| cell.as_string().unwrap_or_default())
                .collect::<Vec<_>>(),
        ),
        None => return Vec::new(),
    };

    let mut records = Vec::new();
    for row in rows {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let mut record = RawRow::new();
        for (i, header) in headers.iter().enumerate() {
            let value = row.get(i).map(cell_to_raw).unwrap_or(JsonValue::Null);
            record.insert(header.clone(), value);
        }
        records.push(record);
    }

    records
}

fn cell_to_raw(cell: &Data) -> RawValue {
    match cell {
        Data::Empty => JsonValue::Null,
        Data::String(s) => JsonValue::String(s.clone()),
        Data::Bool(b) => JsonValue::Bool(*b),
        Data::Int(i) => JsonValue::from(*i),
        Data::Float(f) => serde_json::Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Data::DateTime(_) => cell
            .as_datetime()
            .map(|dt| JsonValue::String(dt.format("%Y-%m-%dT%H:%M:%S").to_string()))
            .unwrap_or(JsonValue::Null),
        Data::DateTimeIso(s) | Data::DurationIso(s) => JsonValue::String(s.clone()),
        Data::Error(_) => JsonValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_buffer_is_a_decode_error() {
        let garbage = b"this is not a spreadsheet";
        assert!(matches!(
            read_workbook_sheets(garbage),
            Err(IngestError::DecodeError(_))
        ));
    }

    #[test]
    fn test_empty_buffer_is_a_decode_error() {
        assert!(read_workbook_sheets(&[]).is_err());
    }

    #[test]
    fn test_rows_from_range_dedups_headers_and_fills_missing_cells() {
        let mut range: calamine::Range<Data> = calamine::Range::new((0, 0), (3, 2));
        range.set_value((0, 0), Data::String("a".to_string()));
        range.set_value((0, 1), Data::String("a".to_string()));
        range.set_value((0, 2), Data::String("b".to_string()));
        range.set_value((1, 0), Data::Int(1));
        range.set_value((1, 1), Data::Int(2));
        range.set_value((1, 2), Data::String("x".to_string()));
        // row 2 stays fully empty
        range.set_value((3, 0), Data::Int(3));

        let rows = rows_from_range(&range);

        // The fully empty row is skipped
        assert_eq!(rows.len(), 2);

        let keys: Vec<&str> = rows[0].keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["a", "a_1", "b"]);

        assert_eq!(rows[0]["a_1"], serde_json::json!(2));
        assert_eq!(rows[0]["b"], serde_json::json!("x"));

        // Cells missing from the short row read as null
        assert_eq!(rows[1]["a"], serde_json::json!(3));
        assert!(rows[1]["a_1"].is_null());
        assert!(rows[1]["b"].is_null());
    }

    #[test]
    fn test_empty_sheet_yields_no_rows() {
        let range: calamine::Range<Data> = calamine::Range::empty();
        assert!(rows_from_range(&range).is_empty());
    }

    #[test]
    fn test_cell_conversion() {
        assert_eq!(cell_to_raw(&Data::Int(3)), serde_json::json!(3));
        assert_eq!(cell_to_raw(&Data::Float(2.5)), serde_json::json!(2.5));
        assert_eq!(cell_to_raw(&Data::Bool(true)), serde_json::json!(true));
        assert_eq!(
            cell_to_raw(&Data::String("x".to_string())),
            serde_json::json!("x")
        );
        assert!(cell_to_raw(&Data::Empty).is_null());
    }
}
