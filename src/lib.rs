// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Census
//!
//! Character and word census for mixed Chinese/English text extracted from
//! PDF documents.
//!
//! ## Core Features
//!
//! - **Page Assembly**: per-page text joined in page order, one `\n` after each page
//! - **Classification**: CJK ideographs (unified block, extensions A-E,
//!   compatibility blocks), ASCII letters and words, ASCII digits, Chinese and
//!   English punctuation as closed sets, Unicode whitespace, line breaks
//! - **Counting**: one pass, counted in Unicode scalar values, so supplementary
//!   plane ideographs count once
//! - **Input Gate**: only PDF input (MIME type or `%PDF-` signature) reaches extraction
//! - **Extraction**: pluggable [`PageExtractor`](extractors::PageExtractor), with a
//!   `lopdf` backend behind the `lopdf` feature
//!
//! Categories overlap and do not partition the text: `\n` is both whitespace
//! and a line break, and an emoji only counts toward the totals.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_census::text::{assemble_pages, compute_counts};
//!
//! let text = assemble_pages(["Hello 世界，123!"]);
//! let counts = compute_counts(&text);
//!
//! assert_eq!(counts.ideograph_count(), 2);
//! assert_eq!(counts.latin_word_count(), 1);
//! assert_eq!(counts.chinese_punctuation_count(), 1);
//! assert_eq!(counts.line_break_count(), 1);
//! ```
//!
//! Holding the state of a loaded document:
//!
//! ```no_run
//! use pdf_census::extractors::LopdfExtractor;
//! use pdf_census::CensusSession;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = CensusSession::new();
//! session.load_file("paper.pdf", &LopdfExtractor)?;
//! if let Some(counts) = session.statistics() {
//!     println!("{}", counts);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Assembly, classification and counting
pub mod text;

// Document boundary
pub mod extractors;

// Caller-held state
pub mod session;

// Report rendering
pub mod converters;

// Re-exports
pub use config::CensusConfig;
pub use error::{Error, Result};
pub use session::{CensusSession, LoadedDocument};
pub use text::{assemble_pages, compute_counts, CategoryCounts, TextBlob};
