//! Error types for the nitparse-core library.

use thiserror::Error;

/// Main error type for the nitparse library.
///
/// The item parser itself is total over all string inputs and never
/// produces an error; these variants cover the surrounding concerns
/// (text extraction, configuration, I/O).
#[derive(Error, Debug)]
pub enum NitError {
    /// Text extraction error.
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the document-to-text extraction boundary.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The document could not be opened or decoded at all.
    #[error("failed to read document: {0}")]
    Read(String),

    /// The document was opened but text extraction failed.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The input format is not one this extractor handles.
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for the nitparse library.
pub type Result<T> = std::result::Result<T, NitError>;
