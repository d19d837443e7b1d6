//! Block layout of the purchase-order document.
//!
//! Maps a `PurchaseOrderData` onto a fixed sequence of docx paragraphs and
//! tables. Sizes are half-points, widths are fiftieths of a percent.

use docx_rs::{
    AlignmentType, BreakType, Docx, LineSpacing, Paragraph, Run, RunFonts, Shading, Style,
    StyleType, Table, TableCell, TableRow, VAlignType, WidthType,
};

use super::common::{first_non_empty, format_amount, format_quantity};
use crate::purchase_order::model::PurchaseOrderData;

pub const INSTITUTION_NAME: &str = "QUEENS' COLLEGE";
pub const INSTITUTION_ADDRESS: &str = "Khandwa Road, Indore (M.P.)";
pub const DOCUMENT_TITLE: &str = "PURCHASE ORDER";
pub const NET_PAYABLE_LABEL: &str = "NET PAYABLE AMOUNT (INCL. TAXES):";

const FULL_WIDTH: usize = 5000;
const HALF_WIDTH: usize = 2500;

const SECTION_SHADE: &str = "F2F2F2";
const HEADER_SHADE: &str = "D9D9D9";
const TOTAL_SHADE: &str = "E6E6E6";
const TITLE_COLOR: &str = "8B4513";

const CELL_TEXT_SIZE: usize = 20;
const HEADING_CELL_SIZE: usize = 22;
const DETAIL_SIZE: usize = 18;

const HEADING_3: &str = "Heading3";
const SIGNATURE_LINE: &str = "__________________________";

/// Build the complete document for `data`.
pub fn build_document(data: &PurchaseOrderData) -> Docx {
    let mut docx = Docx::new().add_style(
        Style::new(HEADING_3, StyleType::Paragraph)
            .name("Heading 3")
            .bold()
            .size(26),
    );

    for paragraph in title_block() {
        docx = docx.add_paragraph(paragraph);
    }
    docx = docx.add_table(info_table(data));
    docx = docx.add_paragraph(
        Paragraph::new()
            .add_run(Run::new().add_text("ITEMIZED ORDER DETAILS"))
            .style(HEADING_3)
            .align(AlignmentType::Center)
            .line_spacing(LineSpacing::new().before(400).after(100)),
    );
    docx = docx.add_table(items_table(data));
    for paragraph in terms_block(data) {
        docx = docx.add_paragraph(paragraph);
    }
    docx.add_table(signature_table())
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    fn to_docx(self) -> AlignmentType {
        match self {
            Align::Left => AlignmentType::Left,
            Align::Center => AlignmentType::Center,
            Align::Right => AlignmentType::Right,
        }
    }
}

/// Options for a single-paragraph table cell.
#[derive(Debug, Clone, Copy)]
struct CellStyle {
    size: usize,
    bold: bool,
    align: Align,
    shade: Option<&'static str>,
    width: Option<usize>,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            size: CELL_TEXT_SIZE,
            bold: false,
            align: Align::Left,
            shade: None,
            width: None,
        }
    }
}

impl CellStyle {
    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    fn shade(mut self, fill: &'static str) -> Self {
        self.shade = Some(fill);
        self
    }

    fn half_width(mut self) -> Self {
        self.width = Some(HALF_WIDTH);
        self
    }
}

fn text_run(text: impl Into<String>, size: usize, bold: bool) -> Run {
    let run = Run::new().add_text(text).size(size);
    if bold {
        run.bold()
    } else {
        run
    }
}

fn text_cell(text: impl Into<String>, style: CellStyle) -> TableCell {
    let mut cell = TableCell::new()
        .add_paragraph(
            Paragraph::new()
                .add_run(text_run(text, style.size, style.bold))
                .align(style.align.to_docx()),
        )
        .vertical_align(VAlignType::Center);
    if let Some(fill) = style.shade {
        cell = cell.shading(Shading::new().fill(fill));
    }
    if let Some(width) = style.width {
        cell = cell.width(width, WidthType::Pct);
    }
    cell
}

/// A cell holding one small paragraph per line; `bold_first` emphasises the
/// leading line.
fn detail_cell(lines: Vec<String>, bold_first: bool, width: Option<usize>) -> TableCell {
    let mut cell = TableCell::new();
    for (index, line) in lines.into_iter().enumerate() {
        let bold = bold_first && index == 0;
        cell = cell.add_paragraph(Paragraph::new().add_run(text_run(line, DETAIL_SIZE, bold)));
    }
    match width {
        Some(width) => cell.width(width, WidthType::Pct),
        None => cell,
    }
}

fn title_block() -> Vec<Paragraph> {
    vec![
        Paragraph::new()
            .add_run(
                Run::new()
                    .add_text(INSTITUTION_NAME)
                    .bold()
                    .size(40)
                    .color(TITLE_COLOR)
                    .fonts(RunFonts::new().ascii("Times New Roman").hi_ansi("Times New Roman")),
            )
            .align(AlignmentType::Center),
        Paragraph::new()
            .add_run(
                Run::new()
                    .add_text(INSTITUTION_ADDRESS)
                    .size(20)
                    .fonts(RunFonts::new().ascii("Arial").hi_ansi("Arial")),
            )
            .align(AlignmentType::Center),
        Paragraph::new()
            .add_run(
                Run::new()
                    .add_text(DOCUMENT_TITLE)
                    .bold()
                    .size(32)
                    .underline("single")
                    .fonts(RunFonts::new().ascii("Arial").hi_ansi("Arial")),
            )
            .align(AlignmentType::Center)
            .line_spacing(LineSpacing::new().before(200).after(300)),
    ]
}

fn info_table(data: &PurchaseOrderData) -> Table {
    let heading = CellStyle::default().bold().size(HEADING_CELL_SIZE);
    let section = heading.shade(SECTION_SHADE);

    let vendor = &data.vendor;
    let buyer = &data.buyer;
    let bank = &data.bank_details;
    let reference = &data.reference;

    let rows = vec![
        TableRow::new(vec![
            text_cell(format!("P.O. NO: {}", data.po_no), heading.half_width()),
            text_cell(
                format!("DATE: {}", data.date),
                heading.half_width().align(Align::Right),
            ),
        ]),
        TableRow::new(vec![
            text_cell("SUPPLIER INFORMATION:", section),
            text_cell("CONSIGNEE / BUYER DETAILS:", section),
        ]),
        TableRow::new(vec![
            detail_cell(
                vec![
                    format!("Company: {}", vendor.company_name),
                    format!("Contact: {}", vendor.contact_person),
                    format!("Address: {}", vendor.address),
                    format!("Email: {}", vendor.email),
                    format!("Phone: {}", vendor.phone),
                ],
                true,
                Some(HALF_WIDTH),
            ),
            detail_cell(
                vec![
                    format!("Org: {}", buyer.organization),
                    format!("Attention: {}", buyer.contact_person),
                    format!("Address: {}", buyer.address),
                    format!("Internal POC: {} ({})", data.poc.name, data.poc.phone),
                ],
                true,
                Some(HALF_WIDTH),
            ),
        ]),
        TableRow::new(vec![
            text_cell("BANKING & TAX DETAILS:", section),
            text_cell("QUOTATION REFERENCE:", section),
        ]),
        TableRow::new(vec![
            detail_cell(
                vec![
                    format!("Bank: {}", bank.bank),
                    format!("A/C: {}", bank.account_no),
                    format!("Branch: {} (IFSC: {})", bank.branch, bank.ifsc_code),
                    format!(
                        "GSTIN: {} | PAN: {}",
                        data.other_details.gst_no, data.other_details.pan_no
                    ),
                ],
                false,
                None,
            ),
            TableCell::new()
                .add_paragraph(Paragraph::new().add_run(text_run(
                    format!("Ref No: {}", reference.quotation_no),
                    DETAIL_SIZE,
                    false,
                )))
                .add_paragraph(Paragraph::new().add_run(text_run(
                    format!("Quote Date: {}", reference.date),
                    DETAIL_SIZE,
                    false,
                )))
                .add_paragraph(Paragraph::new().add_run(text_run(
                    format!("Agreed Amount: ₹ {}", reference.amount),
                    DETAIL_SIZE,
                    true,
                ))),
        ]),
    ];

    Table::new(rows)
        .width(FULL_WIDTH, WidthType::Pct)
        .set_grid(vec![4680, 4680])
}

fn items_table(data: &PurchaseOrderData) -> Table {
    let header = CellStyle::default()
        .bold()
        .align(Align::Center)
        .shade(HEADER_SHADE);
    let centered = CellStyle::default().align(Align::Center);
    let right = CellStyle::default().align(Align::Right);

    let mut rows = vec![TableRow::new(
        [
            "SR.",
            "ITEM / PRODUCT DESCRIPTION",
            "QTY",
            "BASIC (₹)",
            "GST (₹)",
            "TOTAL (₹)",
        ]
        .into_iter()
        .map(|label| text_cell(label, header))
        .collect(),
    )];

    rows.extend(data.items.iter().enumerate().map(|(index, item)| {
        TableRow::new(vec![
            text_cell((index + 1).to_string(), centered),
            text_cell(item.description.clone(), CellStyle::default()),
            text_cell(format_quantity(item.qty), centered),
            text_cell(format_amount(item.basic_cost), right),
            text_cell(format_amount(item.gst), right),
            text_cell(format_amount(item.total_cost), right.bold()),
        ])
    }));

    rows.push(TableRow::new(vec![
        TableCell::new()
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(NET_PAYABLE_LABEL).bold())
                    .align(AlignmentType::Right),
            )
            .grid_span(5),
        text_cell(
            format_amount(data.grand_total()),
            right.bold().shade(TOTAL_SHADE),
        ),
    ]));

    Table::new(rows)
        .width(FULL_WIDTH, WidthType::Pct)
        .set_grid(vec![700, 3560, 900, 1400, 1400, 1400])
}

/// Body text of the four standard clauses, in order.
pub fn term_clauses(data: &PurchaseOrderData) -> [(&'static str, String); 4] {
    let terms = &data.terms;
    [
        (
            "1. Quality Assurance: ",
            format!(
                "The supplied {} must confirm to high-quality industrial standards and requirements of Queens' College.",
                first_non_empty(&[terms.quality_assurance_item.as_str()], "products")
            ),
        ),
        (
            "2. Delivery Schedule: ",
            format!(
                "Delivery must be completed within {} of the PO date.",
                first_non_empty(&[terms.delivery_timeline.as_str()], "specified timeline")
            ),
        ),
        (
            "3. Payment Terms: ",
            "Official tax invoice is mandatory. Settlement will be made post verification of goods."
                .to_string(),
        ),
        (
            "4. Compliance: ",
            format!(
                "Order strictly follows the finalized quotation of ₹ {}.",
                first_non_empty(
                    &[
                        terms.compliance_quote_amount.as_str(),
                        data.reference.amount.as_str(),
                    ],
                    "specified amount"
                )
            ),
        ),
    ]
}

fn terms_block(data: &PurchaseOrderData) -> Vec<Paragraph> {
    let mut paragraphs = vec![Paragraph::new()
        .add_run(text_run("STANDARD TERMS & CONDITIONS", 24, true))
        .line_spacing(LineSpacing::new().before(400).after(100))];

    let clauses = term_clauses(data);
    let last = clauses.len() - 1;
    for (index, (label, body)) in clauses.into_iter().enumerate() {
        let mut paragraph = Paragraph::new()
            .add_run(text_run(label, DETAIL_SIZE, true))
            .add_run(text_run(body, DETAIL_SIZE, false));
        if index == last {
            paragraph = paragraph.line_spacing(LineSpacing::new().after(600));
        }
        paragraphs.push(paragraph);
    }
    paragraphs
}

fn signature_run(label: &str, caption: &str) -> Run {
    Run::new()
        .bold()
        .add_break(BreakType::TextWrapping)
        .add_break(BreakType::TextWrapping)
        .add_text(SIGNATURE_LINE)
        .add_break(BreakType::TextWrapping)
        .add_text(label)
        .add_break(BreakType::TextWrapping)
        .add_text(caption)
}

fn signature_table() -> Table {
    let cell = |run: Run, align: AlignmentType| {
        TableCell::new()
            .add_paragraph(Paragraph::new().add_run(run).align(align))
            .clear_all_border()
    };

    Table::new(vec![TableRow::new(vec![
        cell(
            signature_run("Authorized Signatory", "Queens' College, Indore"),
            AlignmentType::Left,
        ),
        cell(
            signature_run("Vendor Acceptance", "(Stamp & Signature)"),
            AlignmentType::Right,
        ),
    ])])
    .width(FULL_WIDTH, WidthType::Pct)
    .set_grid(vec![4680, 4680])
}
