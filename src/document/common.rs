//! Common helpers for document generation.
//!
//! Number formatting, placeholder fallbacks and output file naming.

use lazy_static::lazy_static;
use regex::Regex;

use crate::purchase_order::numeric::finite_or_zero;

pub const DEFAULT_FILE_STEM: &str = "PurchaseOrder";
pub const DOCX_EXTENSION: &str = "docx";

const EXPONENT_BELOW: f64 = 1e-6;
const EXPONENT_FROM: f64 = 1e21;

lazy_static! {
    static ref ILLEGAL_FILENAME_CHARS: Regex =
        Regex::new(r#"[/\\?%*:|"<>]"#).expect("valid filename pattern");
}

/// Two fixed decimals; non-finite values print as `0.00`.
pub fn format_amount(value: f64) -> String {
    // `+ 0.0` folds -0.0 into 0.0 so it never prints as "-0.00"
    format!("{:.2}", finite_or_zero(value) + 0.0)
}

/// Shortest round-trip form: `3.0` prints `3`, `2.5` prints `2.5`.
/// Magnitudes of at least 1e21 or below 1e-6 switch to exponent notation
/// with a signed exponent (`1e+21`, `1.5e-7`).
pub fn format_quantity(value: f64) -> String {
    let value = finite_or_zero(value) + 0.0;
    let magnitude = value.abs();
    if magnitude != 0.0 && !(EXPONENT_BELOW..EXPONENT_FROM).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        format!("{}", value)
    }
}

/// First non-empty candidate, else `placeholder`.
pub fn first_non_empty<'a>(candidates: &[&'a str], placeholder: &'a str) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|value| !value.is_empty())
        .unwrap_or(placeholder)
}

/// Replace characters that are illegal in filenames with `-`.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let stem = if name.is_empty() { fallback } else { name };
    ILLEGAL_FILENAME_CHARS.replace_all(stem, "-").into_owned()
}

/// `<sanitized po number>.docx`, or `PurchaseOrder.docx` for an empty number.
pub fn document_filename(po_no: &str) -> String {
    format!(
        "{}.{}",
        sanitize_filename(po_no, DEFAULT_FILE_STEM),
        DOCX_EXTENSION
    )
}
