//! PDF page text extraction backed by `lopdf`.

use super::PageExtractor;
use crate::error::{Error, Result};
use lopdf::Document;

/// Extracts page text with `lopdf`.
///
/// Pages are read in page-number order. Encrypted documents and documents
/// with an unreadable page fail as a whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }
}

impl PageExtractor for LopdfExtractor {
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>> {
        let doc = Document::load_mem(data).map_err(|e| {
            log::warn!("lopdf failed to load document: {}", e);
            Error::Extraction(e.to_string())
        })?;

        if doc.is_encrypted() {
            log::warn!("PDF is encrypted and requires a password");
            return Err(Error::Encrypted);
        }

        let pages = doc.get_pages();
        log::debug!("Document has {} page(s)", pages.len());

        let mut texts = Vec::with_capacity(pages.len());
        for &page_number in pages.keys() {
            let text = doc.extract_text(&[page_number]).map_err(|e| {
                log::warn!("Failed to extract text from page {}: {}", page_number, e);
                Error::Extraction(format!("page {}: {}", page_number, e))
            })?;
            texts.push(text);
        }

        Ok(texts)
    }
}
