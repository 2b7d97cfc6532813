//! Assembly of per-page text into a single document text.

use std::fmt;

/// The full assembled text of one document.
///
/// A `TextBlob` is immutable once built. It is replaced wholesale when a new
/// document is loaded, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TextBlob(String);

impl TextBlob {
    /// Wrap already-assembled text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The assembled text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the blob holds no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in Unicode scalar values (not bytes, not UTF-16 units).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Consume the blob and return the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TextBlob {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TextBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join page texts in order, terminating every page with `\n`.
///
/// Pages are not trimmed, reordered or deduplicated, and empty pages still
/// contribute their separator. An empty page sequence yields an empty blob.
///
/// # Examples
///
/// ```
/// use pdf_census::text::assemble_pages;
///
/// assert_eq!(assemble_pages(["A", "B"]).as_str(), "A\nB\n");
/// assert!(assemble_pages(Vec::<String>::new()).is_empty());
/// ```
pub fn assemble_pages<I, S>(pages: I) -> TextBlob
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        text.push_str(page.as_ref());
        text.push('\n');
    }
    TextBlob(text)
}
