// ============================================================
// INGESTION USE CASES
// ============================================================
// Orchestrate parsing, inference, coercion, and table assembly

pub mod assemble;
pub mod ingest;

pub use assemble::assemble_table;
pub use ingest::{ingest_path, ingest_text, ingest_workbook};
