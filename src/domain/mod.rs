// ============================================================
// TABLE DOMAIN LAYER
// ============================================================
// Core types and policies for typed tables
// No I/O, no async

pub mod column;
pub mod error;
pub mod media_type;
pub mod naming;
pub mod semantic_type;
pub mod table;
pub mod value;

pub use column::Column;
pub use error::{IngestError, Result};
pub use media_type::MediaType;
pub use semantic_type::SemanticType;
pub use table::{DataTable, TableDerive};
pub use value::Value;

/// Raw (pre-coercion) cell value as delivered by the parsers.
pub type RawValue = serde_json::Value;

/// A parsed but not yet typed row: column name -> raw value.
/// `serde_json::Map` preserves insertion order, which is what fixes
/// the column order of the assembled table.
pub type RawRow = serde_json::Map<String, RawValue>;
