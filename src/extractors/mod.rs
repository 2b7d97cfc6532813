//! Page text extraction at the document boundary.
//!
//! A [`PageExtractor`] turns the bytes of an accepted document into the text
//! of each page. [`extract_document`] gates the input, runs the extractor
//! and assembles the pages into a [`TextBlob`]. Extraction is
//! all-or-nothing: a failure on any page discards every page.

pub mod format;
#[cfg(feature = "lopdf")]
pub mod lopdf_backend;

pub use format::{check_mime_type, detect_pdf, is_pdf_mime_type, PdfSignature, PDF_MIME_TYPE};
#[cfg(feature = "lopdf")]
pub use lopdf_backend::LopdfExtractor;

use crate::config::CensusConfig;
use crate::error::{Error, Result};
use crate::text::{assemble_pages, TextBlob};

/// Converts an accepted document into per-page plain text.
///
/// Implementations return every page, in page order, or an error. Partial
/// results are never returned.
pub trait PageExtractor {
    /// Extract the text of every page.
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>>;
}

impl<E: PageExtractor + ?Sized> PageExtractor for &E {
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>> {
        (**self).extract_pages(data)
    }
}

impl<E: PageExtractor + ?Sized> PageExtractor for Box<E> {
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>> {
        (**self).extract_pages(data)
    }
}

/// Extractor returning page text that was obtained elsewhere.
///
/// The document bytes are only used for validation by
/// [`extract_document`]; this extractor ignores them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreExtractedPages {
    pages: Vec<String>,
}

impl PreExtractedPages {
    /// Create from page texts in page order.
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of pages held.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl PageExtractor for PreExtractedPages {
    fn extract_pages(&self, _data: &[u8]) -> Result<Vec<String>> {
        Ok(self.pages.clone())
    }
}

/// Validate `data`, extract its pages and assemble them.
///
/// # Errors
///
/// - [`Error::FileTooLarge`] when `data` exceeds `config.max_file_size`
/// - [`Error::UnsupportedInput`] / [`Error::InvalidHeader`] when `data` is
///   not a PDF; the extractor is not called
/// - [`Error::Extraction`] / [`Error::Encrypted`] from the extractor, or
///   when `config.strict_pages` is set and no pages were produced
pub fn extract_document<E>(data: &[u8], extractor: &E, config: &CensusConfig) -> Result<TextBlob>
where
    E: PageExtractor + ?Sized,
{
    config.check_size(data.len())?;
    let signature = detect_pdf(data, config.header_search_window)?;
    log::debug!(
        "Accepted PDF {}.{} ({} bytes)",
        signature.major,
        signature.minor,
        data.len()
    );

    let pages = extractor.extract_pages(data)?;
    if pages.is_empty() {
        if config.strict_pages {
            return Err(Error::Extraction("document has no pages".to_string()));
        }
        log::warn!("Extractor returned no pages");
    }

    log::info!("Extracted {} page(s)", pages.len());
    Ok(assemble_pages(&pages))
}
