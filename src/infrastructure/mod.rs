// ============================================================
// INGESTION INFRASTRUCTURE
// ============================================================
// Adapters for external data formats: delimited text, spreadsheet
// workbooks, and raw byte streams

pub mod delimited;
pub mod encoding;
pub mod workbook;

pub use delimited::DelimitedParser;
pub use encoding::decode_text;
pub use workbook::read_workbook_sheets;
