//! Error types for the knowledge crate.
//!
//! Loading a knowledge base can fail while reading the file, while
//! decoding the JSON document, or while checking that the tables agree
//! with each other. Each case gets its own variant so callers can report
//! exactly what went wrong.

use thiserror::Error;

/// Errors that can occur while loading or validating a knowledge base
#[derive(Error, Debug)]
pub enum KnowledgeError {
    /// File could not be found or opened
    #[error("Failed to open knowledge file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the table layout
    #[error("Parse error in {source_name}: {reason}")]
    ParseError { source_name: String, reason: String },

    /// A table entry had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The same category was declared twice
    #[error("Duplicate food category: {0}")]
    DuplicateCategory(String),

    /// A pairing rule names a category that is not declared
    #[error("Pairing rule {rule} references unknown category {category}")]
    UnknownCategory { rule: String, category: String },

    /// Table validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, KnowledgeError>;
