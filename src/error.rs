//! Unified error handling for the headline-sentiment crate
//!
//! Every fallible operation in the library returns [`Result`]. The
//! transforms themselves are total; errors come from malformed rows,
//! invalid arguments, resource files and I/O at the edges.
//!
//! # Usage
//!
//! ```rust,ignore
//! use headline_sentiment::error::{Error, ErrorCategory};
//!
//! fn report(err: &Error) {
//!     match err.category() {
//!         ErrorCategory::Input => eprintln!("bad input: {err}"),
//!         _ => eprintln!("error: {err}"),
//!     }
//! }
//! ```

use std::io;
use thiserror::Error;

/// Classification of errors for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Rows or arguments that violate a caller contract
    Input,
    /// Lexicon and stopword resources
    Resource,
    /// File and encoding errors
    Storage,
    /// Configuration errors
    Config,
}

impl ErrorCategory {
    /// Short human readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Input => "input error",
            Self::Resource => "resource error",
            Self::Storage => "storage error",
            Self::Config => "configuration error",
        }
    }
}

/// Unified error type for the headline-sentiment crate
#[derive(Error, Debug)]
pub enum Error {
    /// A batch operation received a row without a required field
    #[error("Row {row} is missing required field '{field}'")]
    MissingField { row: usize, field: String },

    /// A field whose value cannot be interpreted
    #[error("Row {row} has invalid value '{value}' for field '{field}'")]
    InvalidField {
        row: usize,
        field: String,
        value: String,
    },

    /// A numeric argument outside its valid range
    #[error("Invalid value for {name}: {value}")]
    InvalidRange { name: &'static str, value: i64 },

    /// Malformed lexicon or stopword resource
    #[error("Invalid lexicon entry at line {line}: {reason}")]
    Lexicon { line: usize, reason: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a missing-field error
    pub fn missing_field(row: usize, field: impl Into<String>) -> Self {
        Self::MissingField {
            row,
            field: field.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingField { .. } | Self::InvalidField { .. } | Self::InvalidRange { .. } => {
                ErrorCategory::Input
            }
            Self::Lexicon { .. } => ErrorCategory::Resource,
            Self::Io(_) | Self::Csv(_) | Self::Json(_) => ErrorCategory::Storage,
            Self::Config(_) => ErrorCategory::Config,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
