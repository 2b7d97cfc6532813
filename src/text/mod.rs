//! Text assembly and classification.
//!
//! - [`assemble`]: joins per-page text into one [`TextBlob`]
//! - [`classify`]: fixed per-character category rules
//! - [`census`]: one-pass tally of those categories into [`CategoryCounts`]

pub mod assemble;
pub mod census;
pub mod classify;

pub use assemble::{assemble_pages, TextBlob};
pub use census::{compute_counts, CategoryCounts, StatEntry};
pub use classify::CharClass;
