//! Date format configuration.

use serde::{Deserialize, Serialize};

/// Configuration for date format handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// Date-time formats tried after the date formats; the time part is discarded
    pub datetime_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%m/%d/%Y".to_string(), // US: 01/15/2023
                "%m-%d-%Y".to_string(), // US with dashes: 01-15-2023
                "%Y/%m/%d".to_string(), // 2023/01/15
                "%d.%m.%Y".to_string(), // Dotted: 15.01.2023
                "%Y%m%d".to_string(),   // Compact: 20230115
                "%d %b %Y".to_string(), // 15 Jan 2023
                "%d %B %Y".to_string(), // 15 January 2023
                "%b %d, %Y".to_string(), // Jan 15, 2023
                "%B %d, %Y".to_string(), // January 15, 2023
            ],
            datetime_formats: vec![
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M:%S%.f".to_string(),
                "%m/%d/%Y %H:%M".to_string(),
                "%m/%d/%Y %H:%M:%S".to_string(),
            ],
            enable_format_detection: true,
        }
    }
}
