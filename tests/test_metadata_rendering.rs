//! Integration tests for metadata rendering and document assembly.

use pdf_smith::{Document, MetaObject, PdfRender};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_end_to_end_metadata_fragment() {
    init_logging();

    let mut meta = MetaObject::new("Report").unwrap();
    meta.set_author("A. Writer");
    meta.add_keyword("draft");
    meta.add_keyword("v2");

    let fragment = meta.render_pdf().unwrap();

    // Every expected line, in the fixed emission order.
    let expected = [
        "\\Title (Report)\n",
        "\\Author (A. Writer)\n",
        "\\Subject ()\n",
        "\\Keywords (draft v2)\n",
        "\\Creator (GoMan PDF)\n",
        "\\Producer (GoMan PDF)\n",
        "\\CreationDate (D:",
        "\\ModDate (D:",
    ];
    let mut cursor = 0;
    for needle in expected {
        let at = fragment[cursor..]
            .find(needle)
            .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
        cursor += at + needle.len();
    }
}

#[test]
fn test_fresh_object_omits_author_and_keywords() {
    let mut meta = MetaObject::new("Untitled Work").unwrap();
    let fragment = meta.render_pdf().unwrap();

    assert!(!fragment.contains("\\Author"));
    assert!(!fragment.contains("\\Keywords"));
    assert!(fragment.contains("\\Subject ()\n"));
}

#[test]
fn test_consecutive_renders_restamp_dates() {
    let mut meta = MetaObject::new("Test").unwrap();

    meta.render_pdf().unwrap();
    let first = meta.modification_date().unwrap();

    std::thread::sleep(std::time::Duration::from_millis(1100));

    let fragment = meta.render_pdf().unwrap();
    let second = meta.modification_date().unwrap();

    assert!(second > first, "timestamps must track each render");

    // The emitted dates reflect the second render, not the first.
    let stamp = second.format("D:%Y%m%d%H%M%S").to_string();
    assert!(
        fragment.contains(&stamp),
        "fragment should carry the latest stamp {stamp}"
    );
}

#[test]
fn test_document_concatenates_fragments_in_order() {
    init_logging();

    let mut doc = Document::new();
    doc.add_object(Box::new(MetaObject::new("Alpha").unwrap()));
    doc.add_object(Box::new(MetaObject::new("Beta").unwrap()));

    let body = doc.render_objects().unwrap();
    let alpha = body.find("\\Title (Alpha)").unwrap();
    let beta = body.find("\\Title (Beta)").unwrap();
    assert!(alpha < beta);
}
