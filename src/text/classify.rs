//! Per-character classification rules for mixed Chinese/English text.
//!
//! Each [`CharClass`] is an independent predicate over a single Unicode
//! scalar value. The classes are **not** a partition:
//!
//! - a character may satisfy several classes (`\n` is both
//!   [`CharClass::Whitespace`] and [`CharClass::LineBreak`]);
//! - many characters satisfy none (emoji, `¥`, `「`, accented Latin, kana),
//!   and only show up in the totals.
//!
//! Punctuation classes are closed literal sets rather than Unicode general
//! category tests, so results do not depend on the Unicode tables of the
//! host platform.

use phf::phf_set;

/// Inclusive CJK ideograph ranges: the unified block, extensions A through E
/// and the two compatibility blocks.
pub const IDEOGRAPH_RANGES: [(u32, u32); 8] = [
    (0x4E00, 0x9FFF),   // CJK Unified Ideographs
    (0x3400, 0x4DBF),   // Extension A
    (0x20000, 0x2A6DF), // Extension B
    (0x2A700, 0x2B73F), // Extension C
    (0x2B740, 0x2B81F), // Extension D
    (0x2B820, 0x2CEAF), // Extension E
    (0xF900, 0xFAFF),   // Compatibility Ideographs
    (0x2F800, 0x2FA1F), // Compatibility Ideographs Supplement
];

/// Punctuation counted as Chinese punctuation.
///
/// `，。！？、；：""''（）【】《》…—～·`
///
/// The ASCII quotes `"` and `'` belong to this set and to
/// [`ENGLISH_PUNCTUATION`], so each one counts in both tallies.
static CHINESE_PUNCTUATION: phf::Set<char> = phf_set! {
    '\u{FF0C}', // ，
    '\u{3002}', // 。
    '\u{FF01}', // ！
    '\u{FF1F}', // ？
    '\u{3001}', // 、
    '\u{FF1B}', // ；
    '\u{FF1A}', // ：
    '"',
    '\'',
    '\u{FF08}', // （
    '\u{FF09}', // ）
    '\u{3010}', // 【
    '\u{3011}', // 】
    '\u{300A}', // 《
    '\u{300B}', // 》
    '\u{2026}', // …
    '\u{2014}', // —
    '\u{FF5E}', // ～
    '\u{00B7}', // ·
};

/// ASCII punctuation and symbols counted as English punctuation.
static ENGLISH_PUNCTUATION: phf::Set<char> = phf_set! {
    ',', '.', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}',
    '<', '>', '/', '\\', '@', '#', '$', '%', '^', '&', '*', '-', '_', '+',
    '=', '|', '`', '~',
};

/// A single-character category.
///
/// Latin words are runs of characters and therefore not a `CharClass`;
/// see [`crate::text::census`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// CJK ideograph, see [`IDEOGRAPH_RANGES`]
    Ideograph,
    /// ASCII letter `A`-`Z` / `a`-`z`
    LatinLetter,
    /// ASCII digit `0`-`9`
    Digit,
    /// Member of the fixed Chinese punctuation set
    ChinesePunctuation,
    /// Member of the fixed ASCII punctuation set
    EnglishPunctuation,
    /// Unicode `White_Space`
    Whitespace,
    /// U+000A only
    LineBreak,
}

impl CharClass {
    /// Every class, in report order.
    pub const ALL: [CharClass; 7] = [
        CharClass::Ideograph,
        CharClass::LatinLetter,
        CharClass::Digit,
        CharClass::ChinesePunctuation,
        CharClass::EnglishPunctuation,
        CharClass::Whitespace,
        CharClass::LineBreak,
    ];

    /// Test `ch` against this class.
    #[inline]
    pub fn matches(self, ch: char) -> bool {
        match self {
            CharClass::Ideograph => is_ideograph(ch),
            CharClass::LatinLetter => is_latin_letter(ch),
            CharClass::Digit => is_digit(ch),
            CharClass::ChinesePunctuation => is_chinese_punctuation(ch),
            CharClass::EnglishPunctuation => is_english_punctuation(ch),
            CharClass::Whitespace => is_whitespace(ch),
            CharClass::LineBreak => is_line_break(ch),
        }
    }

    /// All classes `ch` belongs to. Empty for unclassified characters.
    pub fn classes_of(ch: char) -> impl Iterator<Item = CharClass> {
        Self::ALL.into_iter().filter(move |class| class.matches(ch))
    }
}

/// Check whether a character is a CJK ideograph.
#[inline]
pub fn is_ideograph(ch: char) -> bool {
    let code = ch as u32;
    IDEOGRAPH_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

/// ASCII letters only; `é` or `ß` are not Latin letters here.
#[inline]
pub fn is_latin_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// ASCII digits only; full-width `０` is not a digit here.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check membership in the fixed Chinese punctuation set.
#[inline]
pub fn is_chinese_punctuation(ch: char) -> bool {
    CHINESE_PUNCTUATION.contains(&ch)
}

/// Check membership in the fixed ASCII punctuation set.
#[inline]
pub fn is_english_punctuation(ch: char) -> bool {
    ENGLISH_PUNCTUATION.contains(&ch)
}

/// Unicode `White_Space`, the same class `\s` matches in the `regex` crate.
///
/// Includes U+3000 IDEOGRAPHIC SPACE, NBSP and U+0085; excludes U+FEFF and
/// U+200B, which are format characters.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// `\n` only. `\r`, U+2028 and U+0085 are whitespace but not line breaks.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == '\n'
}
