//! Text extraction from source documents.
//!
//! One document in, its raw text out. Extraction is the pipeline's isolated
//! unit of work: the coordinator in [`crate::pipeline::parallel`] runs many
//! of these concurrently and contains each failure to its own document.

pub mod pdf;

pub use pdf::PdfTextExtractor;

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),
}

/// Converts one document into raw text.
///
/// Implementations must be shareable across extraction workers.
pub trait TextExtractor: Sync {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}
