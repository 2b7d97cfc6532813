//! Presentation of census results.
//!
//! Renders [`CategoryCounts`](crate::text::CategoryCounts) as plain text, a
//! markdown table or JSON. The absent state (no document loaded) has its own
//! rendering and is never shown as zeros.
//!
//! # Examples
//!
//! ```
//! use pdf_census::converters::{render_statistics, ReportFormat, ReportOptions};
//! use pdf_census::text::CategoryCounts;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let counts = CategoryCounts::of("Hello 世界");
//! let options = ReportOptions::new().with_format(ReportFormat::Markdown);
//! let table = render_statistics(Some(&counts), &options)?;
//! assert!(table.contains("| Chinese characters | 2 |"));
//! # Ok(())
//! # }
//! ```

pub mod report;

pub use report::{render_statistics, ReportFormat, ReportOptions, NO_STATISTICS};
