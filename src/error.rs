//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using RecordError.
pub type Result<T> = std::result::Result<T, RecordError>;

/// Errors that can occur while decoding stored vocabulary records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The stored JSON is not a well-formed vocabulary record. Covers
    /// malformed ISO-8601 timestamps, which fail at parse time rather
    /// than silently mis-ordering the queue.
    #[error("malformed vocabulary record: {0}")]
    Malformed(#[from] serde_json::Error),
}
