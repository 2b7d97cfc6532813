//! End-to-end tests through the lopdf extraction backend.
#![cfg(feature = "lopdf")]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pdf_census::extractors::{LopdfExtractor, PageExtractor};
use pdf_census::{CensusSession, Error};

/// Build a PDF with one Helvetica text line per page.
fn build_pdf(page_lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for line in page_lines {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*line)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[test]
fn test_extracts_pages_in_order() {
    let data = build_pdf(&["Alpha one", "Beta two", "Gamma three"]);
    let pages = LopdfExtractor::new().extract_pages(&data).unwrap();

    assert_eq!(pages.len(), 3);
    assert!(pages[0].contains("Alpha"));
    assert!(pages[1].contains("Beta"));
    assert!(pages[2].contains("Gamma"));
}

#[test]
fn test_session_counts_extracted_text() {
    let data = build_pdf(&["Hello World 2024", "Rust"]);
    let mut session = CensusSession::new();
    let doc = session
        .load_bytes("generated.pdf", &data, &LopdfExtractor)
        .unwrap();

    let counts = doc.counts();
    assert_eq!(counts.latin_word_count(), 3);
    assert_eq!(counts.latin_letter_count(), 14);
    assert_eq!(counts.digit_count(), 4);
    assert!(counts.line_break_count() >= 2);
    assert_eq!(
        counts.total_count_no_whitespace(),
        counts.total_count() - counts.whitespace_count()
    );
}

#[test]
fn test_corrupt_pdf_is_extraction_error() {
    let mut data = build_pdf(&["soon broken"]);
    data.truncate(data.len() / 3);

    let mut session = CensusSession::new();
    let err = session
        .load_bytes("corrupt.pdf", &data, &LopdfExtractor)
        .unwrap_err();
    assert!(matches!(err, Error::Extraction(_) | Error::Encrypted));
    assert!(session.statistics().is_none());
}

#[test]
fn test_non_pdf_rejected_before_lopdf() {
    let mut session = CensusSession::new();
    let err = session
        .load_bytes("image.jpg", &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10], &LopdfExtractor)
        .unwrap_err();
    assert!(err.is_unsupported_input());
}
