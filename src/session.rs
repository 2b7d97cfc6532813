//! Caller-held census state.
//!
//! A [`CensusSession`] owns at most one [`LoadedDocument`]: a file name, its
//! assembled text and the counts computed from that text. Loading a new
//! document builds the complete replacement first and then swaps it in with
//! a single assignment, so readers never see a file name paired with
//! another document's counts.
//!
//! Failed loads (unsupported input or extraction failure) leave the
//! previously loaded document in place.

use crate::config::CensusConfig;
use crate::error::Result;
use crate::extractors::{check_mime_type, extract_document, PageExtractor};
use crate::text::{assemble_pages, compute_counts, CategoryCounts, TextBlob};
use std::path::Path;

/// A document whose census has been computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    file_name: String,
    text: TextBlob,
    counts: CategoryCounts,
}

impl LoadedDocument {
    /// Assemble a document from text that has already been extracted.
    pub fn new(file_name: impl Into<String>, text: TextBlob) -> Self {
        let counts = compute_counts(&text);
        Self {
            file_name: file_name.into(),
            text,
            counts,
        }
    }

    /// Name the document was loaded under.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Assembled document text.
    pub fn text(&self) -> &TextBlob {
        &self.text
    }

    /// Census of [`Self::text`].
    pub fn counts(&self) -> &CategoryCounts {
        &self.counts
    }
}

/// Holds the currently loaded document, if any.
#[derive(Debug, Clone, Default)]
pub struct CensusSession {
    config: CensusConfig,
    current: Option<LoadedDocument>,
}

impl CensusSession {
    /// Create an empty session with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with a custom configuration.
    pub fn with_config(config: CensusConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &CensusConfig {
        &self.config
    }

    /// Validate and extract `data`, then replace the current document.
    pub fn load_bytes<E>(
        &mut self,
        file_name: impl Into<String>,
        data: &[u8],
        extractor: &E,
    ) -> Result<&LoadedDocument>
    where
        E: PageExtractor + ?Sized,
    {
        let file_name = file_name.into();
        let text = extract_document(data, extractor, &self.config).map_err(|e| {
            log::warn!("Failed to load '{}': {}", file_name, e);
            e
        })?;
        Ok(self.replace(LoadedDocument::new(file_name, text)))
    }

    /// Like [`Self::load_bytes`], rejecting non-PDF MIME types up front.
    pub fn load_bytes_with_mime_type<E>(
        &mut self,
        file_name: impl Into<String>,
        mime_type: &str,
        data: &[u8],
        extractor: &E,
    ) -> Result<&LoadedDocument>
    where
        E: PageExtractor + ?Sized,
    {
        check_mime_type(mime_type)?;
        self.load_bytes(file_name, data, extractor)
    }

    /// Read a file from disk and load it.
    ///
    /// The session keeps the file name component of `path`.
    pub fn load_file<E>(&mut self, path: impl AsRef<Path>, extractor: &E) -> Result<&LoadedDocument>
    where
        E: PageExtractor + ?Sized,
    {
        let path = path.as_ref();
        let size = std::fs::metadata(path)?.len();
        self.config
            .check_size(usize::try_from(size).unwrap_or(usize::MAX))?;

        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.load_bytes(file_name, &data, extractor)
    }

    /// Load page text that was extracted elsewhere.
    ///
    /// The pages must be complete and in page order.
    pub fn load_pages<I, S>(&mut self, file_name: impl Into<String>, pages: I) -> &LoadedDocument
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.replace(LoadedDocument::new(file_name, assemble_pages(pages)))
    }

    /// Forget the current document. Statistics become absent.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            log::debug!("Cleared '{}'", previous.file_name);
        }
    }

    /// The loaded document, if any.
    pub fn current(&self) -> Option<&LoadedDocument> {
        self.current.as_ref()
    }

    /// Counts for the loaded document; `None` when nothing is loaded.
    ///
    /// An empty document yields `Some` with all-zero counts.
    pub fn statistics(&self) -> Option<&CategoryCounts> {
        self.current.as_ref().map(LoadedDocument::counts)
    }

    /// Text of the loaded document.
    pub fn text(&self) -> Option<&TextBlob> {
        self.current.as_ref().map(LoadedDocument::text)
    }

    /// Name of the loaded document.
    pub fn file_name(&self) -> Option<&str> {
        self.current.as_ref().map(LoadedDocument::file_name)
    }

    fn replace(&mut self, document: LoadedDocument) -> &LoadedDocument {
        log::info!(
            "Loaded '{}': {} characters, {} ideographs, {} Latin words",
            document.file_name,
            document.counts.total_count(),
            document.counts.ideograph_count(),
            document.counts.latin_word_count()
        );
        self.current.insert(document)
    }
}
