//! Document-to-text extraction boundary.
//!
//! The item parser consumes a single linearized text blob; this module
//! is the collaborator that produces it. The contract has exactly two
//! outcomes: extracted text (possibly empty, with page order preserved)
//! or a distinguishable failure. The parser cannot tell "empty because
//! the document is empty" from "empty because a caller mapped a failure
//! to an empty string", and does not need to; both yield an empty or
//! noisy-but-safe item list.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::ExtractError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Trait for document-to-text extractors.
pub trait TextExtractor {
    /// Extract the full text of a document, pages concatenated in
    /// order. `Ok` text may be empty; formatting and layout are not
    /// preserved beyond line breaks.
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Text extractor for PDF documents, backed by the `pdf-extract` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new PDF text extractor.
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let data = std::fs::read(path).map_err(|e| ExtractError::Read(e.to_string()))?;

        let text = pdf_extract::extract_text_from_mem(&data).map_err(|e| {
            warn!("text extraction failed for {}: {e}", path.display());
            ExtractError::TextExtraction(e.to_string())
        })?;

        debug!(
            "extracted {} characters from {}",
            text.len(),
            path.display()
        );
        Ok(text)
    }
}

/// Read parser input from a path, dispatching on extension.
///
/// `.pdf` goes through [`PdfTextExtractor`]; anything else is read as
/// plain text.
pub fn read_input(path: &Path) -> Result<String> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        PdfTextExtractor::new().extract_text(path)
    } else {
        std::fs::read_to_string(path).map_err(|e| ExtractError::Read(e.to_string()))
    }
}
