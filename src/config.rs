//! Configuration for document loading.

/// Document loading configuration.
///
/// Only the document boundary is configurable. Classification rules are
/// fixed so that the same text always produces the same counts.
///
/// # Example
///
/// ```
/// use pdf_census::config::CensusConfig;
///
/// let config = CensusConfig::lenient()
///     .with_max_file_size(10 * 1024 * 1024)
///     .with_strict_pages(true);
/// assert_eq!(config.max_file_size, 10 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CensusConfig {
    /// Maximum input size in bytes
    ///
    /// Default: 500 MB. Set to 0 to disable check.
    pub max_file_size: usize,

    /// Number of leading bytes searched for the `%PDF-` signature
    ///
    /// Many writers emit junk before the header; readers conventionally
    /// accept the signature anywhere in the first 1024 bytes.
    pub header_search_window: usize,

    /// Treat a document that yields no pages as an extraction failure
    pub strict_pages: bool,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

impl CensusConfig {
    /// Strict mode: signature must start the file, documents must have pages.
    pub fn strict() -> Self {
        Self {
            max_file_size: 500 * 1024 * 1024, // 500 MB
            header_search_window: 0,
            strict_pages: true,
        }
    }

    /// Lenient mode: tolerate leading junk and page-less documents.
    pub fn lenient() -> Self {
        Self {
            max_file_size: 500 * 1024 * 1024, // 500 MB
            header_search_window: 1024,
            strict_pages: false,
        }
    }

    /// Set the maximum input size (0 = unlimited).
    pub fn with_max_file_size(mut self, bytes: usize) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Set how many leading bytes may precede the signature.
    pub fn with_header_search_window(mut self, bytes: usize) -> Self {
        self.header_search_window = bytes;
        self
    }

    /// Require at least one page from the extractor.
    pub fn with_strict_pages(mut self, enable: bool) -> Self {
        self.strict_pages = enable;
        self
    }

    /// Check an input length against `max_file_size`.
    pub(crate) fn check_size(&self, size: usize) -> crate::error::Result<()> {
        if self.max_file_size > 0 && size > self.max_file_size {
            return Err(crate::error::Error::FileTooLarge {
                size,
                limit: self.max_file_size,
            });
        }
        Ok(())
    }
}
