//! Integration tests for stamping whole documents.

use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use pdf_numbering::{CoreFont, NumberingConfig, PdfNumberer, StampFormat};
use tempfile::tempdir;

/// Build an in-memory document with the given number of pages, each with
/// one content stream and a shared Helvetica font resource.
fn create_test_document(pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::new();
    for i in 0..pages {
        let content = format!("BT /F1 12 Tf 72 720 Td (Body {}) Tj ET", i + 1);
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => Object::Reference(content_id),
            "Resources" => Object::Dictionary(dictionary! {
                "Font" => Object::Dictionary(dictionary! {
                    "F1" => Object::Reference(font_id),
                }),
            }),
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc
}

/// Collect the decoded content of every stream attached to a page.
fn page_streams(doc: &Document, page_id: ObjectId) -> Vec<String> {
    let page = doc.get_dictionary(page_id).unwrap();
    let ids: Vec<ObjectId> = match page.get(b"Contents").unwrap() {
        Object::Reference(id) => vec![*id],
        Object::Array(array) => array
            .iter()
            .map(|obj| obj.as_reference().unwrap())
            .collect(),
        other => panic!("unexpected Contents object: {:?}", other),
    };
    ids.iter()
        .map(|id| {
            let stream = doc.get_object(*id).unwrap().as_stream().unwrap();
            String::from_utf8_lossy(&stream.content).into_owned()
        })
        .collect()
}

fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().into_values().collect()
}

#[test]
fn stamps_every_page_by_default() {
    let mut doc = create_test_document(3);
    PdfNumberer::default().stamp_page_numbers(&mut doc).unwrap();

    for (i, page_id) in page_ids(&doc).iter().enumerate() {
        let streams = page_streams(&doc, *page_id);
        assert_eq!(streams.len(), 2, "page {} should gain one stamp stream", i);
        assert!(streams[0].contains("Body"), "original content stays first");
        assert!(streams[1].contains(&format!("({}) Tj", i + 1)));
    }
    assert_eq!(doc.get_pages().len(), 3);
}

#[test]
fn reuses_the_existing_helvetica_resource() {
    let mut doc = create_test_document(1);
    PdfNumberer::default().stamp_page_numbers(&mut doc).unwrap();

    let streams = page_streams(&doc, page_ids(&doc)[0]);
    assert!(streams[1].contains("/F1 32 Tf"));
}

#[test]
fn registers_a_fresh_font_resource_when_needed() {
    let config = NumberingConfig::new().with_font(CoreFont::Courier);
    let mut doc = create_test_document(1);
    PdfNumberer::new(config).stamp_page_numbers(&mut doc).unwrap();

    let page_id = page_ids(&doc)[0];
    let streams = page_streams(&doc, page_id);
    assert!(streams[1].contains("/Fpn0 32 Tf"));

    let page = doc.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
    let entry = fonts.get(b"Fpn0").unwrap().as_dict().unwrap();
    assert_eq!(entry.get(b"BaseFont").unwrap().as_name().unwrap(), b"Courier");
    // The pre-existing font is still reachable.
    assert!(fonts.has(b"F1"));
}

#[test]
fn ignored_and_skipped_pages_are_left_untouched() {
    let config = NumberingConfig::new()
        .with_ignore_pages([0])
        .with_skip_pages([2]);
    let mut doc = create_test_document(4);
    PdfNumberer::new(config).stamp_page_numbers(&mut doc).unwrap();

    let ids = page_ids(&doc);
    for &unstamped in &[ids[0], ids[2]] {
        let page = doc.get_dictionary(unstamped).unwrap();
        // Still the original single reference, not an array with a stamp.
        assert!(matches!(page.get(b"Contents").unwrap(), Object::Reference(_)));
    }

    // Page 1 is the first counted page, page 3 follows the skipped slot.
    assert!(page_streams(&doc, ids[1])[1].contains("(1) Tj"));
    assert!(page_streams(&doc, ids[3])[1].contains("(3) Tj"));
}

#[test]
fn custom_format_renders_number_and_total() {
    let config = NumberingConfig::new()
        .with_ignore_pages([0])
        .with_stamp_format(StampFormat::parse("Page {} of {}").unwrap());
    let mut doc = create_test_document(3);
    PdfNumberer::new(config).stamp_page_numbers(&mut doc).unwrap();

    let ids = page_ids(&doc);
    assert!(page_streams(&doc, ids[1])[1].contains("(Page 1 of 2) Tj"));
    assert!(page_streams(&doc, ids[2])[1].contains("(Page 2 of 2) Tj"));
}

#[test]
fn stamped_document_survives_a_save_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("numbered.pdf");

    let mut doc = create_test_document(2);
    PdfNumberer::default().stamp_page_numbers(&mut doc).unwrap();
    doc.save(&path).unwrap();

    let reloaded = Document::load(&path).unwrap();
    assert_eq!(reloaded.get_pages().len(), 2);
    let ids = page_ids(&reloaded);
    let streams = page_streams(&reloaded, ids[0]);
    assert!(streams.iter().any(|s| s.contains("(1) Tj")));
}

#[test]
fn empty_document_is_a_no_op() {
    let mut doc = create_test_document(0);
    PdfNumberer::default().stamp_page_numbers(&mut doc).unwrap();
    assert!(doc.get_pages().is_empty());
}
