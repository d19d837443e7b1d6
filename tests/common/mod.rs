#![allow(dead_code)]

use std::io::{Cursor, Read};

use po_docgen_server::purchase_order::form::{ItemField, PurchaseOrderForm};

/// Text of `word/document.xml` inside a generated `.docx`.
pub fn document_xml(bytes: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("docx is a zip archive");
    let mut file = archive
        .by_name("word/document.xml")
        .expect("docx has a main document part");
    let mut xml = String::new();
    file.read_to_string(&mut xml).expect("document.xml is utf-8");
    xml
}

/// Form with item 1 = 3 x 100 + 18 and item 2 = 2 x 50 + 0.
pub fn two_item_form() -> PurchaseOrderForm {
    let form = PurchaseOrderForm::new();
    let first = form.data().items[0].id.clone();
    let form = form
        .update_item(&first, ItemField::Description, "Lab stools")
        .update_item(&first, ItemField::Qty, "3")
        .update_item(&first, ItemField::BasicCost, "100")
        .update_item(&first, ItemField::Gst, "18")
        .add_item();
    let second = form.data().items[1].id.clone();
    form.update_item(&second, ItemField::Description, "Whiteboard markers")
        .update_item(&second, ItemField::Qty, "2")
        .update_item(&second, ItemField::BasicCost, "50")
        .update_item(&second, ItemField::Gst, "0")
}

/// The `<w:p>` element whose text run is exactly `text`.
pub fn paragraph_with_text<'a>(xml: &'a str, text: &str) -> &'a str {
    let needle = format!(">{}<", text);
    let at = xml
        .find(&needle)
        .unwrap_or_else(|| panic!("no run with text {text:?}"));
    let before = &xml[..at];
    let start = before
        .rfind("<w:p ")
        .into_iter()
        .chain(before.rfind("<w:p>"))
        .max()
        .expect("run sits inside a paragraph");
    let end = at + xml[at..].find("</w:p>").expect("paragraph is closed");
    &xml[start..end]
}

/// Number of runs whose text is exactly `text`.
pub fn run_count(xml: &str, text: &str) -> usize {
    xml.matches(&format!(">{}<", text)).count()
}
