//! Integration tests for loading documents into a census session.

use pdf_census::converters::{render_statistics, ReportOptions, NO_STATISTICS};
use pdf_census::extractors::{PageExtractor, PreExtractedPages};
use pdf_census::{CategoryCounts, CensusConfig, CensusSession, Error, Result};
use std::io::Write;

/// Fails after reading some pages, to check nothing partial is kept.
struct FailsOnThirdPage;

impl PageExtractor for FailsOnThirdPage {
    fn extract_pages(&self, _data: &[u8]) -> Result<Vec<String>> {
        let mut pages = Vec::new();
        for number in 1..=5 {
            if number == 3 {
                return Err(Error::Extraction(format!("page {}: bad content stream", number)));
            }
            pages.push(format!("page {}", number));
        }
        Ok(pages)
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_load_file_from_disk() {
    init_logger();
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(b"%PDF-1.5\n%fake body\n").unwrap();

    let pages = PreExtractedPages::new(["第一页 page one", "第二页"]);
    let mut session = CensusSession::new();
    let doc = session.load_file(file.path(), &pages).unwrap();

    assert!(doc.file_name().ends_with(".pdf"));
    assert_eq!(doc.text().as_str(), "第一页 page one\n第二页\n");
    assert_eq!(doc.counts().ideograph_count(), 6);
    assert_eq!(doc.counts().latin_word_count(), 2);
    assert_eq!(doc.counts().line_break_count(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let mut session = CensusSession::new();
    let result = session.load_file("/nonexistent/dir/missing.pdf", &PreExtractedPages::default());
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(session.statistics().is_none());
}

#[test]
fn test_file_size_limit() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[b'x'; 64]).unwrap();

    let mut session = CensusSession::with_config(CensusConfig::default().with_max_file_size(32));
    let result = session.load_file(file.path(), &PreExtractedPages::default());
    assert!(matches!(result, Err(Error::FileTooLarge { size: 64, limit: 32 })));
}

#[test]
fn test_text_file_rejected_as_unsupported() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all("纯文本 plain text".as_bytes()).unwrap();

    let mut session = CensusSession::new();
    let err = session
        .load_file(file.path(), &PreExtractedPages::new(["never used"]))
        .unwrap_err();
    match &err {
        Error::UnsupportedInput { detected } => assert_eq!(detected, "plain text"),
        other => panic!("expected unsupported input, got {:?}", other),
    }
    assert_eq!(err.user_message(), "Unsupported file type, please choose a PDF file");
    assert!(session.statistics().is_none());
}

#[test]
fn test_extraction_is_all_or_nothing() {
    let mut session = CensusSession::new();
    session.load_pages("previous.pdf", ["earlier"]);

    let err = session
        .load_bytes("broken.pdf", b"%PDF-1.7\n", &FailsOnThirdPage)
        .unwrap_err();
    assert_eq!(err.user_message(), "Parsing failed");

    // Nothing from pages 1 and 2 leaked into the session
    assert_eq!(session.file_name(), Some("previous.pdf"));
    assert_eq!(session.text().unwrap().as_str(), "earlier\n");
}

#[test]
fn test_rendering_follows_session_state() {
    let mut session = CensusSession::new();
    let options = ReportOptions::new();

    let before = render_statistics(session.statistics(), &options).unwrap();
    assert!(before.contains(NO_STATISTICS));

    session.load_pages("blank.pdf", [""]);
    let blank = render_statistics(session.statistics(), &options).unwrap();
    assert!(blank.contains("Line breaks: 1"));
    assert!(blank.contains("Total characters (no whitespace): 0"));

    session.clear();
    let after = render_statistics(session.statistics(), &options).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_counts_match_direct_computation() {
    let pages = ["《Rust 编程》第 3 版", "Hello, world!\r\n"];
    let mut session = CensusSession::new();
    session
        .load_bytes("book.pdf", b"%PDF-1.4", &PreExtractedPages::new(pages))
        .unwrap();

    let direct = CategoryCounts::of("《Rust 编程》第 3 版\nHello, world!\r\n\n");
    assert_eq!(session.statistics(), Some(&direct));
    assert_eq!(direct.chinese_punctuation_count(), 2);
    assert_eq!(direct.english_punctuation_count(), 2);
    assert_eq!(direct.line_break_count(), 3);
    assert_eq!(direct.whitespace_count(), 8);
}
