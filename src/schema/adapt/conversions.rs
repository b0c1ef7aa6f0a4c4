//! Module for coercing raw cell text into typed values.
//!
//! Every function here is total: a value that cannot be coerced becomes
//! `None` (the missing marker) instead of an error.

/// Whether a cell holds exactly the missing-value sentinel
#[must_use]
pub fn is_sentinel(value: &str, sentinel: &str) -> bool {
    value == sentinel
}

/// Trim a free-text cell; blank text is missing
#[must_use]
pub fn normalize_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trim and lower-case a status-like value
#[must_use]
pub fn normalize_status(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Coerce a cell to a finite number
#[must_use]
pub fn coerce_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Coerce a cell to a four-digit calendar year
#[must_use]
pub fn coerce_year(value: &str) -> Option<i32> {
    coerce_number(value)
        .filter(|n| n.fract() == 0.0 && (1000.0..=9999.0).contains(n))
        .map(|n| n as i32)
}

/// Title-case a value: a letter is upper-cased when the previous character
/// is not a letter, and lower-cased otherwise
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_is_letter = false;
    for c in value.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}
