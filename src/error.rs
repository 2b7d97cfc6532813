//! Error types for the census library.
//!
//! Every error originates at the document boundary: format detection, file
//! access or page text extraction. Classification and counting never fail.

/// Result type alias for census operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a document for a census.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input is not a document type the extractor accepts
    #[error("Unsupported input: expected a PDF document, found {detected}")]
    UnsupportedInput {
        /// Short description of what was detected instead
        detected: String,
    },

    /// Invalid PDF header (expected '%PDF-M.m')
    #[error("Invalid PDF header: expected '%PDF-', found '{0}'")]
    InvalidHeader(String),

    /// Document type was accepted but its pages could not be read
    #[error("PDF parsing failed: {0}")]
    Extraction(String),

    /// Document is encrypted and cannot be read without a password
    #[error("PDF parsing failed: document is encrypted")]
    Encrypted,

    /// Input exceeds the configured size limit
    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge {
        /// Size of the rejected input in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Short message suitable for showing to an end user.
    ///
    /// Extraction problems all collapse into one generic message; the
    /// detailed reason stays available through `Display`.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::UnsupportedInput { .. } | Error::InvalidHeader(_) => {
                "Unsupported file type, please choose a PDF file"
            },
            Error::Extraction(_) | Error::Encrypted => "Parsing failed",
            Error::FileTooLarge { .. } => "File is too large",
            Error::Io(_) => "Could not read the file",
            Error::Json(_) => "Could not render the statistics",
        }
    }

    /// Whether the input was rejected before reaching the extractor.
    pub fn is_unsupported_input(&self) -> bool {
        matches!(self, Error::UnsupportedInput { .. } | Error::InvalidHeader(_))
    }
}
