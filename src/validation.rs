//! Text-to-number validation for every field that reaches a pricer.
//!
//! Any failure maps to one `PricingError::InvalidInput` for the whole request;
//! callers use `?` so the first bad field stops the request before any
//! pricing happens.

use crate::errors::{PricingError, PricingResult};
use std::borrow::Cow;

/// Parse a free-standing numeric field.
#[inline]
pub fn parse(text: &str) -> PricingResult<f64> {
    parse_field("value", text)
}

/// Parse an absolute field (prices, years, notionals).
pub fn parse_field(field: &'static str, text: &str) -> PricingResult<f64> {
    let parsed = strip_digit_separators(text.trim()).and_then(|t| t.parse::<f64>().ok());
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => {
            tracing::warn!(field, input = text, "rejected non-numeric input");
            Err(PricingError::InvalidInput { field })
        }
    }
}

/// Remove `_` separators that sit between two digits (`1_000_000`).
/// Any other underscore makes the text invalid.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !before.is_some_and(|c| c.is_ascii_digit()) || !after.is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
    }
    Some(Cow::Owned(text.replace('_', "")))
}

/// Parse a percent-denominated field and convert it to a decimal fraction.
#[inline]
pub fn parse_percent_field(field: &'static str, text: &str) -> PricingResult<f64> {
    parse_field(field, text).map(|v| v / 100.0)
}

/// Optional percent field: absent or blank text means "not supplied".
pub fn parse_optional_percent(field: &'static str, text: Option<&str>) -> PricingResult<Option<f64>> {
    match text {
        Some(t) if !t.trim().is_empty() => parse_percent_field(field, t).map(Some),
        _ => Ok(None),
    }
}
