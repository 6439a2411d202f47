//! Tabular data ingestion with semantic type inference.
//!
//! Raw delimited text, JSON row collections, and spreadsheet workbooks are
//! parsed into rectangular, typed in-memory tables. Each column gets the
//! narrowest semantic type that every one of its non-null values satisfies,
//! and all values are coerced to that type before the table is assembled.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::assemble::assemble_table;
pub use application::ingest::{ingest_path, ingest_text, ingest_workbook};
pub use domain::column::Column;
pub use domain::error::{IngestError, Result};
pub use domain::media_type::MediaType;
pub use domain::semantic_type::{coerce_values, infer_type, SemanticType};
pub use domain::table::{DataTable, TableDerive};
pub use domain::value::Value;
