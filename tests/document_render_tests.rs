mod common;

use po_docgen_server::document::common::document_filename;
use po_docgen_server::document::{DocxRenderEngine, Generator, PurchaseOrderGenerator};
use po_docgen_server::purchase_order::model::PurchaseOrderData;

#[test]
fn test_sanitized_filename() {
    assert_eq!(document_filename("A/B?C"), "A-B-C.docx");
    assert_eq!(document_filename(""), "PurchaseOrder.docx");
}

#[test]
fn test_document_contains_fixed_blocks() {
    let mut data = common::two_item_form().into_data();
    data.po_no = "QC-17".to_string();
    data.vendor.company_name = "Acme Traders".to_string();

    let doc = DocxRenderEngine::render_blocking(&data).unwrap();
    let xml = common::document_xml(&doc.bytes);

    for expected in [
        "PURCHASE ORDER",
        "P.O. NO: QC-17",
        "Company: Acme Traders",
        "SUPPLIER INFORMATION:",
        "ITEMIZED ORDER DETAILS",
        "ITEM / PRODUCT DESCRIPTION",
        "NET PAYABLE AMOUNT (INCL. TAXES):",
        "Authorized Signatory",
        "Vendor Acceptance",
    ] {
        assert!(xml.contains(expected), "missing {expected}");
    }
}

#[test]
fn test_item_rows_in_order_with_two_decimals() {
    let data = common::two_item_form().into_data();
    let xml = common::document_xml(&DocxRenderEngine::render_blocking(&data).unwrap().bytes);

    let stools = xml.find("Lab stools").unwrap();
    let markers = xml.find("Whiteboard markers").unwrap();
    assert!(stools < markers);

    assert!(xml.contains("318.00"));
    assert!(xml.contains("100.00"));
    assert!(xml.contains("18.00"));
    // net payable
    assert!(xml.contains("418.00"));
}

#[test]
fn test_grand_total_is_recomputed_from_items() {
    let mut data = common::two_item_form().into_data();
    data.items[1].total_cost = 82.0;
    let xml = common::document_xml(&DocxRenderEngine::render_blocking(&data).unwrap().bytes);
    assert!(xml.contains("400.00"));
}

#[test]
fn test_compliance_clause_placeholder() {
    let mut data = PurchaseOrderData::default();
    data.reference.amount = String::new();
    data.terms.compliance_quote_amount = String::new();

    let xml = common::document_xml(&DocxRenderEngine::render_blocking(&data).unwrap().bytes);
    assert!(xml.contains("finalized quotation of ₹ specified amount."));
}

#[test]
fn test_non_finite_amounts_render_zero() {
    let mut data = PurchaseOrderData::default();
    data.items[0].basic_cost = f64::NAN;
    data.items[0].total_cost = f64::INFINITY;

    let xml = common::document_xml(&DocxRenderEngine::render_blocking(&data).unwrap().bytes);
    assert!(xml.contains("0.00"));
    assert!(!xml.contains("NaN"));
}

#[tokio::test]
async fn test_generator_names_file_from_po_number() {
    let data = PurchaseOrderData {
        po_no: "A/B?C".to_string(),
        ..PurchaseOrderData::default()
    };
    let doc = PurchaseOrderGenerator::new().generate(data).await.unwrap();
    assert_eq!(doc.filename, "A-B-C.docx");
    assert!(doc.bytes.starts_with(b"PK"));
}

#[test]
fn test_serial_numbers_start_at_one() {
    let data = common::two_item_form().into_data();
    let xml = common::document_xml(&DocxRenderEngine::render_blocking(&data).unwrap().bytes);

    let first_serial = xml.find(">1<").unwrap();
    let stools = xml.find("Lab stools").unwrap();
    let second_serial = xml.find(">2<").unwrap();
    let markers = xml.find("Whiteboard markers").unwrap();
    assert!(first_serial < stools);
    assert!(stools < second_serial);
    assert!(second_serial < markers);

    assert!(common::paragraph_with_text(&xml, "1").contains(r#"<w:jc w:val="center""#));
}

#[test]
fn test_amount_columns_are_right_aligned() {
    let data = common::two_item_form().into_data();
    let xml = common::document_xml(&DocxRenderEngine::render_blocking(&data).unwrap().bytes);

    for amount in ["100.00", "18.00", "318.00", "418.00"] {
        let paragraph = common::paragraph_with_text(&xml, amount);
        assert!(
            paragraph.contains(r#"<w:jc w:val="right""#),
            "{amount} is not right aligned"
        );
    }
    assert!(common::paragraph_with_text(&xml, "3").contains(r#"<w:jc w:val="center""#));
}

#[test]
fn test_table_shading_and_net_payable_span() {
    let data = common::two_item_form().into_data();
    let xml = common::document_xml(&DocxRenderEngine::render_blocking(&data).unwrap().bytes);

    assert!(xml.contains(r#"w:fill="D9D9D9""#));
    assert!(xml.contains(r#"w:fill="E6E6E6""#));
    assert!(xml.contains(r#"<w:gridSpan w:val="5""#));

    let span = xml.find(r#"<w:gridSpan w:val="5""#).unwrap();
    let label = xml.find("NET PAYABLE AMOUNT").unwrap();
    let total = xml.find(">418.00<").unwrap();
    assert!(span < label && label < total);
}

#[test]
fn test_signature_cells_have_no_borders() {
    let data = common::two_item_form().into_data();
    let xml = common::document_xml(&DocxRenderEngine::render_blocking(&data).unwrap().bytes);

    let label = xml.find("Authorized Signatory").unwrap();
    let table_start = xml[..label].rfind("<w:tbl>").unwrap();
    let signatures = &xml[table_start..];
    assert!(signatures.contains(r#"w:val="nil""#));
}
