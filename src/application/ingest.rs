// ============================================================
// INGESTION ENTRY POINTS
// ============================================================
// Public boundary: text, workbook, and file-path ingestion

use std::path::Path;

use serde_json::Value as JsonValue;
use tracing::{error, info, warn};

use super::assemble::assemble_table;
use crate::domain::error::{IngestError, Result};
use crate::domain::media_type::MediaType;
use crate::domain::naming::resolve_duplicate_names;
use crate::domain::table::DataTable;
use crate::domain::RawRow;
use crate::infrastructure::delimited::DelimitedParser;
use crate::infrastructure::encoding::decode_text;
use crate::infrastructure::workbook::read_workbook_sheets;

/// Ingest raw text as a single table.
///
/// `media_type` is a MIME string or bare token for csv, tsv, or json.
/// Returns `None` for blank input, an unrecognized media type, or
/// unparseable JSON; none of those are faults, the caller decides the
/// user messaging.
pub fn ingest_text(title: &str, text: &str, media_type: &str) -> Option<DataTable> {
    match MediaType::from_mime(media_type) {
        Some(MediaType::Csv) | Some(MediaType::Tsv) => table_from_delimited(title, text),
        Some(MediaType::Json) => table_from_json(title, text),
        None => {
            warn!(media_type, "Unrecognized media type, no table produced");
            None
        }
    }
}

/// Ingest a spreadsheet workbook buffer, one table per sheet.
///
/// Tables come back in workbook sheet order, titled `<title>-<sheet>`.
/// Any decode failure returns an empty list with an error log instead of
/// propagating a fault.
pub fn ingest_workbook(title: &str, buffer: &[u8]) -> Vec<DataTable> {
    match read_workbook_sheets(buffer) {
        Ok(sheets) => {
            info!(sheet_count = sheets.len(), title, "Decoded workbook");
            sheets
                .into_iter()
                .map(|(sheet, rows)| {
                    assemble_table(&sheet_table_title(title, &sheet), &rows, true, None)
                })
                .collect()
        }
        Err(err) => {
            error!(error = %err, title, "Failed to process workbook");
            Vec::new()
        }
    }
}

/// Ingest a file from disk, routing by extension.
///
/// Delimited and JSON files are decoded to text first; workbook formats
/// go through the workbook path. The table title is the file stem. I/O
/// failures and unsupported extensions are errors here, at the outer
/// boundary; the inner ingestion keeps its absent/empty conventions.
pub fn ingest_path(path: &Path) -> Result<Vec<DataTable>> {
    let title = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("table")
        .to_string();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => {
            let buffer = std::fs::read(path)?;
            Ok(ingest_workbook(&title, &buffer))
        }
        other => {
            let media_type = MediaType::from_extension(other).ok_or_else(|| {
                IngestError::ValidationError(format!(
                    "Unsupported file extension: {}",
                    path.display()
                ))
            })?;
            let text = decode_text(&std::fs::read(path)?);
            let table = match media_type {
                MediaType::Csv | MediaType::Tsv => table_from_delimited(&title, &text),
                MediaType::Json => table_from_json(&title, &text),
            };
            Ok(table.into_iter().collect())
        }
    }
}

/// Title for the table assembled from one workbook sheet.
fn sheet_table_title(title: &str, sheet: &str) -> String {
    format!("{}-{}", title, sheet)
}

fn table_from_delimited(title: &str, text: &str) -> Option<DataTable> {
    if text.trim().is_empty() {
        warn!("Empty text provided for data, no table produced");
        return None;
    }

    let rows = match DelimitedParser::new().parse_rows(text) {
        Ok(rows) => rows,
        Err(err) => {
            warn!(error = %err, "Could not parse delimited text, no table produced");
            return None;
        }
    };

    let header = rows.first()?;
    let names = resolve_duplicate_names(header);

    let records: Vec<RawRow> = rows[1..]
        .iter()
        .map(|row| {
            let mut record = RawRow::new();
            for (i, name) in names.iter().enumerate() {
                let value = row
                    .get(i)
                    .map(|field| JsonValue::String(field.clone()))
                    .unwrap_or(JsonValue::Null);
                record.insert(name.clone(), value);
            }
            record
        })
        .collect();

    Some(assemble_table(title, &records, true, None))
}

fn table_from_json(title: &str, text: &str) -> Option<DataTable> {
    if text.trim().is_empty() {
        warn!("Empty text provided for data, no table produced");
        return None;
    }

    match serde_json::from_str::<Vec<RawRow>>(text) {
        Ok(rows) => Some(assemble_table(title, &rows, true, None)),
        Err(err) => {
            warn!(error = %err, "Could not parse JSON rows, no table produced");
            None
        }
    }
}
