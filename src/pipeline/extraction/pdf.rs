use std::path::Path;

use super::{ExtractionError, TextExtractor};

/// PDF text extractor built on the pdf-extract crate.
/// Handles digital PDFs with embedded text layers; image-only pages come
/// back empty rather than failing.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path)?;
        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;
        Ok(pages.join("\n"))
    }
}
