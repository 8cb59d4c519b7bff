//! Error types for ideaboard-core.
//!
//! The ranking and search functions are total and never fail. Errors only
//! arise at the edge where idea records are read into memory.

use thiserror::Error;

/// Errors that can occur while loading idea records.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    /// Failed to read the records file
    #[error("Failed to read records from {path}: {reason}")]
    Read {
        /// Path that was being read
        path: String,
        /// Underlying I/O failure
        reason: String,
    },
    /// The document is not an array of records or an `{ "ideas": [...] }` object
    #[error("Malformed records document: {0}")]
    MalformedDocument(String),
    /// A single record could not be decoded
    #[error("Invalid record at position {index}: {reason}")]
    InvalidRecord {
        /// Zero-based position of the record in the document
        index: usize,
        /// Decoder message
        reason: String,
    },
}
