//! In-memory PDF builders for tests.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

/// Builds a PDF with one page per entry, each page showing its text in Courier.
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    build(
        pages,
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        },
    )
}

/// Builds a one-page PDF whose font dictionary has no `/Type` entry.
pub fn pdf_with_untyped_font(text: &str) -> Vec<u8> {
    build(
        &[text],
        dictionary! {
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        },
    )
}

fn build(pages: &[&str], font: Dictionary) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(font);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let kids: Vec<Object> = pages
        .iter()
        .map(|text| add_page(&mut doc, pages_id, resources_id, text).into())
        .collect();

    finish(doc, pages_id, kids)
}

/// Builds a structurally valid PDF whose page tree is empty.
pub fn empty_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    finish(doc, pages_id, Vec::new())
}

fn add_page(doc: &mut Document, pages_id: ObjectId, resources_id: ObjectId, text: &str) -> ObjectId {
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("content stream encodes"),
    ));
    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    })
}

fn finish(mut doc: Document, pages_id: ObjectId, kids: Vec<Object>) -> Vec<u8> {
    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("fixture PDF serializes");
    bytes
}
