use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize)]
pub enum IngestError {
    ParseError(String),
    DecodeError(String),
    ValidationError(String),
    IoError(String),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            IngestError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            IngestError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            IngestError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for IngestError {}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
