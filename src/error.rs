//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Transfer failures (parse, validation,
//! missing file, unknown format) are separate variants so callers can inspect
//! exactly why an import or export was rejected.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// An entity factory precondition was violated
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed payload: bad CSV row, bad JSON document, bad token
    #[error("{}", format_parse(.line, .message))]
    Parse {
        /// 1-based line of the payload, when known
        line: Option<u64>,
        message: String,
    },

    /// Imported data failed cross-entity validation
    #[error("Validation error: {entity} {id}: {reason}")]
    Validation {
        entity: &'static str,
        id: String,
        reason: String,
    },

    /// Import source does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// File extension does not select a known transfer format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors outside of import decoding
    #[error("JSON error: {0}")]
    Json(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

fn format_parse(line: &Option<u64>, message: &str) -> String {
    match line {
        Some(line) => format!("Parse error at line {}: {}", line, message),
        None => format!("Parse error: {}", message),
    }
}

impl FintrackError {
    /// Create a parse error tied to a payload line
    pub fn parse_at(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create a parse error with no line information
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            line: None,
            message: message.into(),
        }
    }

    /// Create a validation error for a record
    pub fn validation(
        entity: &'static str,
        id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            entity,
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for operations
    pub fn operation_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Operation",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for FintrackError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        Self::Parse {
            line,
            message: err.to_string(),
        }
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;
