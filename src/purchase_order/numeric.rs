//! Lenient numeric coercion for form input.
//!
//! Numeric line-item fields never reject input: the longest leading numeric
//! prefix is used (`"12abc"` -> 12) and anything else becomes zero.

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

lazy_static! {
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("valid number pattern");
}

/// Parse the leading number of `input`, falling back to `0.0`.
pub fn parse_lenient(input: &str) -> f64 {
    let trimmed = input.trim_start();
    LEADING_NUMBER
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(finite_or_zero)
        .unwrap_or(0.0)
}

/// Non-finite values (NaN, infinities) are treated as zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Serde helper accepting a JSON number or a string for numeric fields.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => finite_or_zero(n),
        NumberOrText::Text(s) => parse_lenient(&s),
        NumberOrText::Other(_) => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_lenient("3"), 3.0);
        assert_eq!(parse_lenient("100.50"), 100.5);
        assert_eq!(parse_lenient("-2"), -2.0);
        assert_eq!(parse_lenient(".5"), 0.5);
        assert_eq!(parse_lenient("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_takes_leading_prefix() {
        assert_eq!(parse_lenient("12abc"), 12.0);
        assert_eq!(parse_lenient("  7.25 units"), 7.25);
        assert_eq!(parse_lenient("5."), 5.0);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_lenient("abc"), 0.0);
        assert_eq!(parse_lenient(""), 0.0);
        assert_eq!(parse_lenient("-"), 0.0);
        assert_eq!(parse_lenient("Infinity"), 0.0);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(4.5), 4.5);
    }

    #[derive(Deserialize)]
    struct Amount {
        #[serde(deserialize_with = "deserialize_lenient")]
        value: f64,
    }

    fn amount(json: &str) -> f64 {
        serde_json::from_str::<Amount>(json).unwrap().value
    }

    #[test]
    fn test_deserialize_numbers_and_strings() {
        assert_eq!(amount(r#"{"value": 12.5}"#), 12.5);
        assert_eq!(amount(r#"{"value": "40 pcs"}"#), 40.0);
    }

    #[test]
    fn test_deserialize_other_json_is_zero() {
        assert_eq!(amount(r#"{"value": null}"#), 0.0);
        assert_eq!(amount(r#"{"value": true}"#), 0.0);
        assert_eq!(amount(r#"{"value": {"nested": [1, 2]}}"#), 0.0);
    }
}
