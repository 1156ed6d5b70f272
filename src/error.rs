//! Error types for the object stream decoder.
//!
//! Only violations of the byte-level grammar (and I/O failures) are errors.
//! Count-table mismatches are reported as [`Diagnostic`](crate::objstm::Diagnostic)s
//! unless strict mode is enabled.

/// Result type alias for decoder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding an object stream.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    /// Parse error at specific byte offset of the decoded content
    #[error("Failed to parse object at byte {offset}: {reason}")]
    ParseError {
        /// Byte offset where error occurred
        offset: usize,
        /// Reason for parse failure
        reason: String,
    },

    /// Object has wrong type
    #[error("Invalid object type: expected {expected}, found {found}")]
    InvalidObjectType {
        /// Expected object type
        expected: String,
        /// Actual object type found
        found: String,
    },

    /// Unexpected end of content
    #[error("End of content reached unexpectedly")]
    UnexpectedEof,

    /// IO error while reading the source stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid object stream structure (dictionary entries, /Type, /N)
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    /// Stream decoding error
    #[error("Stream decoding error: {0}")]
    Decode(String),

    /// Unsupported stream filter
    #[error("Unsupported filter: {0}")]
    UnsupportedFilter(String),

    /// Declared /N disagrees with the objects present (strict mode only)
    #[error("Object stream declares {declared} objects but {found} were found")]
    ObjectCountMismatch {
        /// Count declared by /N
        declared: usize,
        /// Count observed in the content (a lower bound when more were present)
        found: usize,
    },

    /// Nesting depth limit exceeded
    #[error("Recursion depth limit exceeded (max: {0})")]
    RecursionLimitExceeded(u32),
}

impl Error {
    /// True for errors caused by malformed content rather than I/O or configuration.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::ParseError { .. } | Error::UnexpectedEof | Error::RecursionLimitExceeded(_)
        )
    }
}
