// ============================================================
// DATA TABLE
// ============================================================
// Named, ordered, rectangular collection of typed columns and rows

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::semantic_type::SemanticType;
use super::value::Value;

/// How a derived table was produced from its source table(s).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDerive {
    /// Ids of the table(s) this one was derived from
    pub source: Vec<String>,

    /// Description of the transformation that produced it
    pub operation: String,
}

/// A typed table produced by ingestion.
///
/// `names` and `types` are parallel (same length, same order), and every
/// row's key set equals `names`. Tables are immutable once assembled;
/// downstream transforms produce new tables instead of mutating in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTable {
    /// Unique table id
    pub id: String,

    /// Human-facing display id
    pub display_id: String,

    /// Ordered column names
    pub names: Vec<String>,

    /// Inferred semantic type per column, same order as `names`
    pub types: Vec<SemanticType>,

    /// Ordered row records, one map per input row
    pub rows: Vec<HashMap<String, Value>>,

    /// Present when this table was derived from other tables
    pub derive: Option<TableDerive>,

    /// True for tables imported directly by the user, false for
    /// transient derived tables
    pub anchored: bool,
}

impl DataTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    /// Inferred type of a column, if the column exists.
    pub fn column_type(&self, name: &str) -> Option<SemanticType> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.types.get(i))
            .copied()
    }

    /// Gather one column's coerced values down all rows.
    pub fn column_values(&self, name: &str) -> Option<Vec<Value>> {
        if !self.names.iter().any(|n| n == name) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|row| row.get(name).cloned().unwrap_or(Value::Null))
                .collect(),
        )
    }
}
