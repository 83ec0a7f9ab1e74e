//! Error types for the unidoc library.
//!
//! All errors are represented by the [`UnidocError`] enum. Most read paths
//! never surface an error at all: a missing field is reported internally as
//! [`UnidocError::FieldNotFound`] and turned into an empty result by the
//! reader.
//!
//! # Examples
//!
//! ```
//! use unidoc::error::{Result, UnidocError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(UnidocError::unsupported("batch indexing"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for unidoc operations.
#[derive(Error, Debug)]
pub enum UnidocError {
    /// No field with this name exists in the current document.
    #[error("no field named: {0}")]
    FieldNotFound(String),

    /// An external identifier does not match the resident document.
    #[error("no such document with external id: {0}")]
    DocIdMismatch(String),

    /// An internal identifier does not match the resident document.
    #[error("no such document with internal id: {0:?}")]
    UnknownDocId(Vec<u8>),

    /// A regular expression failed to compile, or a fuzziness is outside
    /// what an automaton supports.
    #[error("Unsupported pattern: {0}")]
    UnsupportedPattern(String),

    /// Operations this index intentionally does not implement.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Analysis-related errors (tokenization, invalid tokenizer patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with UnidocError.
pub type Result<T> = std::result::Result<T, UnidocError>;

impl UnidocError {
    /// Create a new field-not-found error.
    pub fn field_not_found<S: Into<String>>(name: S) -> Self {
        UnidocError::FieldNotFound(name.into())
    }

    /// Create a new document identifier mismatch error.
    pub fn doc_id_mismatch<S: Into<String>>(id: S) -> Self {
        UnidocError::DocIdMismatch(id.into())
    }

    /// Create a new unsupported pattern error.
    pub fn unsupported_pattern<S: Into<String>>(msg: S) -> Self {
        UnidocError::UnsupportedPattern(msg.into())
    }

    /// Create a new unsupported operation error.
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        UnidocError::Unsupported(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        UnidocError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        UnidocError::InvalidConfig(msg.into())
    }

    /// Whether this error only means "the field is absent".
    pub fn is_field_not_found(&self) -> bool {
        matches!(self, UnidocError::FieldNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = UnidocError::field_not_found("title");
        assert_eq!(error.to_string(), "no field named: title");
        assert!(error.is_field_not_found());

        let error = UnidocError::unsupported("batch indexing is not supported by this index");
        assert_eq!(
            error.to_string(),
            "Unsupported operation: batch indexing is not supported by this index"
        );
        assert!(!error.is_field_not_found());

        let error = UnidocError::UnknownDocId(vec![1]);
        assert_eq!(error.to_string(), "no such document with internal id: [1]");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = UnidocError::from(io_error);

        match error {
            UnidocError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
