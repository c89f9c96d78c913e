//! In-memory PDF fixtures for tests.

use lopdf::{dictionary, Document, Object, Stream};

/// A valid PDF with `pages` blank US Letter pages.
pub fn sample_pdf(pages: usize) -> Vec<u8> {
    sample_pdf_with_size(pages, 612, 792)
}

/// A valid PDF whose pages all share the given MediaBox size in points.
pub fn sample_pdf_with_size(pages: usize, width_pt: i64, height_pt: i64) -> Vec<u8> {
    build(pages, width_pt, height_pt, Vec::new())
}

/// A one-page US Letter PDF whose content stream holds `content` verbatim.
pub fn sample_pdf_with_content(content: &[u8]) -> Vec<u8> {
    build(1, 612, 792, content.to_vec())
}

/// Serialize a hand-built document.
pub fn to_bytes(doc: &mut Document) -> Vec<u8> {
    let mut bytes = Vec::new();
    if let Err(err) = doc.save_to(&mut bytes) {
        panic!("in-memory fixture should serialize: {err}");
    }
    bytes
}

fn build(pages: usize, width_pt: i64, height_pt: i64, content: Vec<u8>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::with_capacity(pages);
    for _ in 0..pages {
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.clone()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(width_pt),
                Object::Integer(height_pt),
            ],
            "Contents" => content_id,
        });
        kids.push(page_id.into());
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
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    to_bytes(&mut doc)
}
