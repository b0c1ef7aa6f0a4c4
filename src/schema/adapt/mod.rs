//! Value coercion for raw spreadsheet cells.

pub mod conversions;
pub mod date_utils;
pub mod types;

// Re-export the main types and functions for easier access
pub use conversions::{
    coerce_number, coerce_year, is_sentinel, normalize_status, normalize_text, title_case,
};
pub use date_utils::{detect_date_format, parse_date_string};
pub use types::DateFormatConfig;
