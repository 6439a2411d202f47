// ============================================================
// COLUMN
// ============================================================
// One named field across all rows, with one inferred type

use serde::{Deserialize, Serialize};

use super::semantic_type::SemanticType;
use super::value::Value;

/// A fully coerced table column. Owned exclusively by its parent table;
/// never shared across tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    values: Vec<Value>,
    semantic_type: SemanticType,
}

impl Column {
    pub fn new(values: Vec<Value>, semantic_type: SemanticType) -> Self {
        Self {
            values,
            semantic_type,
        }
    }

    pub fn semantic_type(&self) -> SemanticType {
        self.semantic_type
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    /// Distinct values in first-appearance order. Used to compute the
    /// domain of a field when it is dropped onto a chart shelf.
    pub fn unique_values(&self) -> Vec<Value> {
        let mut seen: Vec<Value> = Vec::new();
        for value in &self.values {
            if !seen.contains(value) {
                seen.push(value.clone());
            }
        }
        seen
    }
}
