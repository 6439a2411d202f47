// ============================================================
// MEDIA TYPES
// ============================================================
// Recognized input formats for text ingestion

use serde::{Deserialize, Serialize};

/// Media type of raw text handed to ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Csv,
    Tsv,
    Json,
}

impl MediaType {
    /// Parse a MIME string or bare token. Returns `None` for anything
    /// unrecognized; the caller treats that as "no table produced".
    pub fn from_mime(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text/csv" | "csv" => Some(MediaType::Csv),
            "text/tab-separated-values" | "tsv" => Some(MediaType::Tsv),
            "application/json" | "json" => Some(MediaType::Json),
            _ => None,
        }
    }

    /// Map a file extension to a media type, for path-based ingestion.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(MediaType::Csv),
            "tsv" | "tab" => Some(MediaType::Tsv),
            "json" => Some(MediaType::Json),
            _ => None,
        }
    }
}
