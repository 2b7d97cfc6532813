//! Character and word census over an assembled document text.
//!
//! [`compute_counts`] makes one pass over the text and tallies every
//! [`CharClass`] a character belongs to, without deduplicating across
//! classes. Counts may overlap and do
//! not add up to the total; see the module docs of
//! [`crate::text::classify`].

use crate::text::assemble::TextBlob;
use crate::text::classify::CharClass;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

lazy_static! {
    /// Regex for any Unicode whitespace character
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s").unwrap();
}

/// Category tallies for one document text.
///
/// A `CategoryCounts` is derived from a [`TextBlob`] and never updated
/// incrementally; a new text produces a new record. Fields are read through
/// accessors so that a record always comes from an actual census.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    ideograph_count: u64,
    latin_word_count: u64,
    latin_letter_count: u64,
    digit_count: u64,
    chinese_punctuation_count: u64,
    english_punctuation_count: u64,
    whitespace_count: u64,
    line_break_count: u64,
    total_count: u64,
    total_count_no_whitespace: u64,
}

/// One labelled row of a [`CategoryCounts`] report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    /// Stable machine key (matches the JSON field name)
    pub key: &'static str,
    /// English label
    pub label: &'static str,
    /// Chinese label
    pub label_zh: &'static str,
    /// Count
    pub value: u64,
}

impl CategoryCounts {
    /// Compute counts for a plain string.
    pub fn of(text: &str) -> Self {
        let mut counts = CategoryCounts::default();
        let mut in_latin_word = false;

        for ch in text.chars() {
            counts.total_count += 1;

            let mut is_letter = false;
            for class in CharClass::classes_of(ch) {
                *counts.tally_mut(class) += 1;
                is_letter |= class == CharClass::LatinLetter;
            }

            // A word starts at every letter that follows a non-letter
            if is_letter && !in_latin_word {
                counts.latin_word_count += 1;
            }
            in_latin_word = is_letter;
        }

        counts.total_count_no_whitespace = count_without_whitespace(text);
        counts
    }

    fn tally_mut(&mut self, class: CharClass) -> &mut u64 {
        match class {
            CharClass::Ideograph => &mut self.ideograph_count,
            CharClass::LatinLetter => &mut self.latin_letter_count,
            CharClass::Digit => &mut self.digit_count,
            CharClass::ChinesePunctuation => &mut self.chinese_punctuation_count,
            CharClass::EnglishPunctuation => &mut self.english_punctuation_count,
            CharClass::Whitespace => &mut self.whitespace_count,
            CharClass::LineBreak => &mut self.line_break_count,
        }
    }

    /// Tally for a single-character class.
    pub fn count_of(&self, class: CharClass) -> u64 {
        match class {
            CharClass::Ideograph => self.ideograph_count,
            CharClass::LatinLetter => self.latin_letter_count,
            CharClass::Digit => self.digit_count,
            CharClass::ChinesePunctuation => self.chinese_punctuation_count,
            CharClass::EnglishPunctuation => self.english_punctuation_count,
            CharClass::Whitespace => self.whitespace_count,
            CharClass::LineBreak => self.line_break_count,
        }
    }

    /// CJK ideographs.
    pub fn ideograph_count(&self) -> u64 {
        self.ideograph_count
    }

    /// Maximal runs of ASCII letters.
    pub fn latin_word_count(&self) -> u64 {
        self.latin_word_count
    }

    /// Individual ASCII letters.
    pub fn latin_letter_count(&self) -> u64 {
        self.latin_letter_count
    }

    /// ASCII digits.
    pub fn digit_count(&self) -> u64 {
        self.digit_count
    }

    /// Characters from the fixed Chinese punctuation set.
    pub fn chinese_punctuation_count(&self) -> u64 {
        self.chinese_punctuation_count
    }

    /// Characters from the fixed ASCII punctuation set.
    pub fn english_punctuation_count(&self) -> u64 {
        self.english_punctuation_count
    }

    /// Unicode whitespace characters, line breaks included.
    pub fn whitespace_count(&self) -> u64 {
        self.whitespace_count
    }

    /// `\n` characters.
    pub fn line_break_count(&self) -> u64 {
        self.line_break_count
    }

    /// Length of the text in Unicode scalar values.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Length of the text after removing every whitespace character.
    pub fn total_count_no_whitespace(&self) -> u64 {
        self.total_count_no_whitespace
    }

    /// Whether every count is zero (the census of an empty text).
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Labelled rows in report order.
    pub fn entries(&self) -> [StatEntry; 10] {
        [
            StatEntry {
                key: "ideographCount",
                label: "Chinese characters",
                label_zh: "中文字符",
                value: self.ideograph_count,
            },
            StatEntry {
                key: "latinWordCount",
                label: "English words",
                label_zh: "英文单词",
                value: self.latin_word_count,
            },
            StatEntry {
                key: "latinLetterCount",
                label: "English letters",
                label_zh: "英文字母",
                value: self.latin_letter_count,
            },
            StatEntry {
                key: "digitCount",
                label: "Digits",
                label_zh: "数字",
                value: self.digit_count,
            },
            StatEntry {
                key: "chinesePunctuationCount",
                label: "Chinese punctuation",
                label_zh: "中文标点",
                value: self.chinese_punctuation_count,
            },
            StatEntry {
                key: "englishPunctuationCount",
                label: "English punctuation",
                label_zh: "英文标点",
                value: self.english_punctuation_count,
            },
            StatEntry {
                key: "whitespaceCount",
                label: "Whitespace",
                label_zh: "空白字符",
                value: self.whitespace_count,
            },
            StatEntry {
                key: "lineBreakCount",
                label: "Line breaks",
                label_zh: "换行符",
                value: self.line_break_count,
            },
            StatEntry {
                key: "totalCount",
                label: "Total characters",
                label_zh: "总字符数",
                value: self.total_count,
            },
            StatEntry {
                key: "totalCountNoWhitespace",
                label: "Total characters (no whitespace)",
                label_zh: "总字符数（不含空白）",
                value: self.total_count_no_whitespace,
            },
        ]
    }
}

impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.entries() {
            writeln!(f, "{}: {}", entry.label, entry.value)?;
        }
        Ok(())
    }
}

/// Compute the census of an assembled document text.
///
/// Pure and idempotent. Accepts any text, including the empty one, for
/// which every count is zero.
pub fn compute_counts(blob: &TextBlob) -> CategoryCounts {
    CategoryCounts::of(blob.as_str())
}

/// Remove whitespace and measure what is left.
///
/// Kept separate from the per-character whitespace tally so that
/// `total_count_no_whitespace` is measured rather than derived.
fn count_without_whitespace(text: &str) -> u64 {
    RE_WHITESPACE.replace_all(text, "").chars().count() as u64
}
