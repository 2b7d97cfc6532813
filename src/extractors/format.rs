//! Input validation for the extraction boundary.
//!
//! Only PDF documents reach a [`PageExtractor`](super::PageExtractor).
//! Inputs are recognized either by MIME type (when the caller has one) or by
//! the `%PDF-M.m` signature at the start of the file.

use crate::error::{Error, Result};

const PDF_MAGIC: &[u8] = b"%PDF-";

/// MIME type accepted at the boundary.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Location and version of a PDF signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfSignature {
    /// Byte offset of `%PDF-` in the input
    pub offset: usize,
    /// Major version digit
    pub major: u8,
    /// Minor version digit
    pub minor: u8,
}

impl PdfSignature {
    /// Version as `(major, minor)`.
    pub fn version(&self) -> (u8, u8) {
        (self.major, self.minor)
    }
}

/// Locate and validate the PDF signature.
///
/// `%PDF-` may start anywhere in the first `search_window + 1` bytes. A
/// missing signature is an [`Error::UnsupportedInput`]; a signature with a
/// malformed version is an [`Error::InvalidHeader`].
pub fn detect_pdf(data: &[u8], search_window: usize) -> Result<PdfSignature> {
    let offset = data
        .windows(PDF_MAGIC.len())
        .take(search_window.saturating_add(1))
        .position(|w| w == PDF_MAGIC)
        .ok_or_else(|| Error::UnsupportedInput {
            detected: describe_format(data).to_string(),
        })?;

    // Format: %PDF-M.m where M is major version (1 digit), m is minor version (1 digit)
    let version = &data[offset + PDF_MAGIC.len()..];
    if version.len() < 3 {
        return Err(Error::InvalidHeader(
            "File too short to contain PDF version".to_string(),
        ));
    }
    if version[1] != b'.' {
        return Err(Error::InvalidHeader(format!(
            "Invalid version format: expected '.', found '{}'",
            version[1] as char
        )));
    }

    let (major, minor) = (version[0], version[2]);
    if !major.is_ascii_digit() || !minor.is_ascii_digit() {
        return Err(Error::InvalidHeader(format!(
            "Invalid version: {}.{} (not digits)",
            major as char, minor as char
        )));
    }

    let major = major - b'0';
    let minor = minor - b'0';

    // PDF 1.0 - 2.0
    if major == 0 || major > 2 {
        return Err(Error::InvalidHeader(format!("Unsupported version {}.{}", major, minor)));
    }

    if offset > 0 {
        log::debug!("PDF signature found after {} bytes of leading data", offset);
    }

    Ok(PdfSignature {
        offset,
        major,
        minor,
    })
}

/// Check a caller-supplied MIME type.
///
/// Parameters (`; charset=...`) and case are ignored.
pub fn is_pdf_mime_type(mime_type: &str) -> bool {
    let essence = mime_type.split(';').next().unwrap_or("").trim();
    essence.eq_ignore_ascii_case(PDF_MIME_TYPE)
}

/// Reject a caller-supplied MIME type other than `application/pdf`.
pub fn check_mime_type(mime_type: &str) -> Result<()> {
    if is_pdf_mime_type(mime_type) {
        Ok(())
    } else {
        Err(Error::UnsupportedInput {
            detected: format!("MIME type '{}'", mime_type),
        })
    }
}

/// Best-effort name for a non-PDF input, used in error messages.
pub fn describe_format(data: &[u8]) -> &'static str {
    match data {
        [] => "empty input",
        [0x89, b'P', b'N', b'G', ..] => "PNG image",
        [0xFF, 0xD8, 0xFF, ..] => "JPEG image",
        [b'G', b'I', b'F', b'8', ..] => "GIF image",
        [b'P', b'K', 0x03, 0x04, ..] => "ZIP archive",
        [0xD0, 0xCF, 0x11, 0xE0, ..] => "OLE compound document",
        _ if std::str::from_utf8(data).is_ok() => "plain text",
        _ => "unknown binary data",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_plain_header() {
        let sig = detect_pdf(b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n", 0).unwrap();
        assert_eq!(sig.offset, 0);
        assert_eq!(sig.version(), (1, 7));
    }

    #[test]
    fn test_detect_header_after_junk() {
        let mut data = vec![b' '; 100];
        data.extend_from_slice(b"%PDF-2.0\n");
        let sig = detect_pdf(&data, 1024).unwrap();
        assert_eq!(sig.offset, 100);
        assert_eq!(sig.version(), (2, 0));
    }

    #[test]
    fn test_junk_beyond_window_rejected() {
        let mut data = vec![b' '; 100];
        data.extend_from_slice(b"%PDF-1.4\n");
        let err = detect_pdf(&data, 99).unwrap_err();
        assert!(matches!(err, Error::UnsupportedInput { .. }));
        assert!(detect_pdf(&data, 100).is_ok());
    }

    #[test]
    fn test_non_pdf_inputs_named() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        match detect_pdf(&png, 1024) {
            Err(Error::UnsupportedInput { detected }) => assert_eq!(detected, "PNG image"),
            other => panic!("expected unsupported input, got {:?}", other),
        }
        assert_eq!(describe_format(b"hello"), "plain text");
        assert_eq!(describe_format(&[]), "empty input");
        assert_eq!(describe_format(&[0xFF, 0xFE, 0x00, 0x80]), "unknown binary data");
    }

    #[test]
    fn test_malformed_version() {
        assert!(matches!(detect_pdf(b"%PDF-1x7", 0), Err(Error::InvalidHeader(_))));
        assert!(matches!(detect_pdf(b"%PDF-a.b", 0), Err(Error::InvalidHeader(_))));
        assert!(matches!(detect_pdf(b"%PDF-3.0", 0), Err(Error::InvalidHeader(_))));
        assert!(matches!(detect_pdf(b"%PDF-1", 0), Err(Error::InvalidHeader(_))));
    }

    #[test]
    fn test_mime_types() {
        assert!(is_pdf_mime_type("application/pdf"));
        assert!(is_pdf_mime_type("Application/PDF; charset=binary"));
        assert!(!is_pdf_mime_type("application/x-pdf-ish"));
        assert!(!is_pdf_mime_type("text/plain"));
        assert!(check_mime_type("image/png").is_err());
    }
}
