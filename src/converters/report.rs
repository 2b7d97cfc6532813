//! Rendering of census results for display.

use crate::error::Result;
use crate::text::CategoryCounts;
use serde_json::json;

/// Text rendered when no document is loaded.
pub const NO_STATISTICS: &str = "No statistics available";

/// Output format for a census report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// `Label: value` lines
    #[default]
    PlainText,
    /// Two-column markdown table
    Markdown,
    /// Pretty-printed JSON object
    Json,
}

/// Options for rendering a census report.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Output format
    pub format: ReportFormat,
    /// Use the Chinese labels instead of the English ones
    pub chinese_labels: bool,
    /// Document name shown above the counts
    pub file_name: Option<String>,
}

impl ReportOptions {
    /// Create default options (plain text, English labels).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Use Chinese labels.
    pub fn with_chinese_labels(mut self, value: bool) -> Self {
        self.chinese_labels = value;
        self
    }

    /// Show a document name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

/// Render the census of the current document, or the absent state.
///
/// `None` renders as [`NO_STATISTICS`] (or `{"statistics": null}` in JSON),
/// never as a table of zeros.
pub fn render_statistics(counts: Option<&CategoryCounts>, options: &ReportOptions) -> Result<String> {
    match options.format {
        ReportFormat::PlainText => Ok(render_plain(counts, options)),
        ReportFormat::Markdown => Ok(render_markdown(counts, options)),
        ReportFormat::Json => {
            let value = json!({
                "fileName": options.file_name,
                "statistics": counts,
            });
            Ok(serde_json::to_string_pretty(&value)?)
        },
    }
}

fn label(entry: &crate::text::StatEntry, options: &ReportOptions) -> &'static str {
    if options.chinese_labels {
        entry.label_zh
    } else {
        entry.label
    }
}

fn render_plain(counts: Option<&CategoryCounts>, options: &ReportOptions) -> String {
    let mut out = String::new();
    if let Some(name) = &options.file_name {
        out.push_str(name);
        out.push('\n');
    }

    match counts {
        None => {
            out.push_str(NO_STATISTICS);
            out.push('\n');
        },
        Some(counts) => {
            for entry in counts.entries() {
                out.push_str(&format!("{}: {}\n", label(&entry, options), entry.value));
            }
        },
    }
    out
}

fn render_markdown(counts: Option<&CategoryCounts>, options: &ReportOptions) -> String {
    let mut out = String::new();
    if let Some(name) = &options.file_name {
        out.push_str(&format!("## {}\n\n", name));
    }

    let Some(counts) = counts else {
        out.push_str(&format!("_{}_\n", NO_STATISTICS));
        return out;
    };

    let (category, count) = if options.chinese_labels {
        ("类别", "数量")
    } else {
        ("Category", "Count")
    };
    out.push_str(&format!("| {} | {} |\n", category, count));
    out.push_str("| --- | ---: |\n");
    for entry in counts.entries() {
        out.push_str(&format!("| {} | {} |\n", label(&entry, options), entry.value));
    }
    out
}
