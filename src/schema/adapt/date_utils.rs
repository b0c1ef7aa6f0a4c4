//! Module for handling date parsing.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::schema::adapt::types::DateFormatConfig;

/// Parse a date string with multiple format attempts
///
/// Returns `None` when no configured or detected format matches; callers
/// treat that as a missing value.
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // `%Y` accepts short years, so "1/5/21" would otherwise land in year 21
    let plausible = |date: &NaiveDate| date.year() >= 1000;

    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            if plausible(&date) {
                return Some(date);
            }
        }
    }

    for format in &config.datetime_formats {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            if plausible(&datetime.date()) {
                return Some(datetime.date());
            }
        }
    }

    // If enabled, try to detect the format based on string patterns
    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    // Check for ISO-like format with dashes (YYYY-MM-DD)
    if s.len() == 10 && s.chars().nth(4) == Some('-') && s.chars().nth(7) == Some('-') {
        return Some("%Y-%m-%d");
    }

    // Check for slashes
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d");
            } else if parts[2].len() == 2 {
                return Some("%m/%d/%y");
            } else if parts[2].len() == 4 {
                if let Ok(first_num) = parts[0].parse::<u8>() {
                    if first_num > 12 {
                        return Some("%d/%m/%Y");
                    }
                    return Some("%m/%d/%Y");
                }
            }
        }
    }

    // Check for compact format (YYYYMMDD)
    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some("%Y%m%d");
    }

    None
}
