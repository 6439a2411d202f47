// ============================================================
// DELIMITED TEXT PARSER
// ============================================================
// Parse tab- or comma-separated text into raw string rows

use csv::ReaderBuilder;

use crate::domain::error::IngestError;

/// Parser for delimited text.
///
/// Without an explicit delimiter it detects tab vs. comma from the input
/// itself. Quoting is handled by the `csv` reader, so fields may contain
/// the delimiter or newlines.
#[derive(Default)]
pub struct DelimitedParser {
    /// Delimiter character; `None` means detect per input
    delimiter: Option<u8>,
}

impl DelimitedParser {
    /// Create a parser that auto-detects the delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit delimiter, skipping detection
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Detect the field delimiter: if the input averages at least one tab
    /// per line it is tab-separated, otherwise comma-separated. An input
    /// with no newlines counts as comma-separated (no division by zero).
    pub fn detect_delimiter(text: &str) -> u8 {
        let mut tabs = 0usize;
        let mut lines = 0usize;
        for c in text.chars() {
            match c {
                '\t' => tabs += 1,
                '\n' => lines += 1,
                _ => {}
            }
        }

        if lines > 0 && tabs as f64 / lines as f64 >= 1.0 {
            b'\t'
        } else {
            b','
        }
    }

    /// Parse the whole input into an ordered sequence of raw string rows.
    /// The first row is the header; no header handling happens here.
    pub fn parse_rows(&self, text: &str) -> Result<Vec<Vec<String>>, IngestError> {
        let delimiter = self
            .delimiter
            .unwrap_or_else(|| Self::detect_delimiter(text));

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true) // Allow rows with different lengths
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                IngestError::ParseError(format!("Failed to parse row {}: {}", index + 1, e))
            })?;
            rows.push(record.iter().map(|field| field.to_string()).collect());
        }

        Ok(rows)
    }
}
