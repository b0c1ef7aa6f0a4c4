//! Column names of the application spreadsheet and header validation.

pub mod adapt;

use itertools::Itertools;

pub use adapt::DateFormatConfig;

/// Patient identifier
pub const PATIENT_ID: &str = "Patient_ID#";
/// Date the grant was requested
pub const GRANT_REQ_DATE: &str = "Grant_Req_Date";
/// Application year
pub const APP_YEAR: &str = "App_Year";
/// Patient city
pub const PT_CITY: &str = "Pt_City";
/// Patient state
pub const PT_STATE: &str = "Pt_State";
/// Patient gender
pub const GENDER: &str = "Gender";
/// Insurance type
pub const INSURANCE_TYPE: &str = "Insurance_Type";
/// Assistance class
pub const ASSISTANCE_TYPE: &str = "Type_of_Assistance_CLASS";
/// Request status
pub const REQUEST_STATUS: &str = "Request_Status";
/// Whether the application was signed
pub const APPLICATION_SIGNED: &str = "Application_Signed?";
/// Whether the payment was submitted
pub const PAYMENT_SUBMITTED: &str = "Payment_Submitted?";
/// Granted amount
pub const AMOUNT: &str = "Amount";
/// Remaining grant balance
pub const REMAINING_BALANCE: &str = "Remaining_Balance";
/// Derived review flag
pub const READY_FOR_REVIEW: &str = "Ready_for_Review";
/// Simulated delay in days
pub const DAYS_TO_SUPPORT: &str = "Days_To_Support";
/// Derived support date
pub const SUPPORT_SENT_DATE: &str = "Support_Sent_Date";
/// Household income; not a fixed column, carried through when the source has it
pub const INCOME: &str = "Income";

/// Source columns that must be present after header normalization
pub const REQUIRED_COLUMNS: [&str; 11] = [
    GRANT_REQ_DATE,
    REQUEST_STATUS,
    APPLICATION_SIGNED,
    PAYMENT_SUBMITTED,
    GENDER,
    INSURANCE_TYPE,
    PT_STATE,
    PT_CITY,
    ASSISTANCE_TYPE,
    AMOUNT,
    REMAINING_BALANCE,
];

/// Source columns used when present
pub const OPTIONAL_COLUMNS: [&str; 2] = [PATIENT_ID, APP_YEAR];

/// Column order of the cleaned artifact
pub const CLEANED_COLUMNS: [&str; 16] = [
    PATIENT_ID,
    GRANT_REQ_DATE,
    APP_YEAR,
    PT_CITY,
    PT_STATE,
    GENDER,
    INSURANCE_TYPE,
    ASSISTANCE_TYPE,
    REQUEST_STATUS,
    APPLICATION_SIGNED,
    PAYMENT_SUBMITTED,
    AMOUNT,
    REMAINING_BALANCE,
    READY_FOR_REVIEW,
    DAYS_TO_SUPPORT,
    SUPPORT_SENT_DATE,
];

/// Normalize a raw header: trim, spaces to underscores, parentheses removed
#[must_use]
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Outcome of checking a header row against the expected columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaCompatibilityReport {
    /// Required columns that are absent
    pub missing_required: Vec<String>,
    /// Optional columns that are absent
    pub missing_optional: Vec<String>,
    /// Derived columns present in the source; they are recomputed instead
    pub ignored: Vec<String>,
    /// Unknown columns, carried through as text in first-seen order
    pub passthrough: Vec<String>,
}

impl SchemaCompatibilityReport {
    /// Whether every required column is present
    #[must_use]
    pub fn compatible(&self) -> bool {
        self.missing_required.is_empty()
    }
}

/// Compare normalized headers with the required and optional column sets
#[must_use]
pub fn check_columns(headers: &[String]) -> SchemaCompatibilityReport {
    let has = |name: &str| headers.iter().any(|h| h == name);

    SchemaCompatibilityReport {
        missing_required: REQUIRED_COLUMNS
            .iter()
            .filter(|c| !has(c))
            .map(ToString::to_string)
            .collect(),
        missing_optional: OPTIONAL_COLUMNS
            .iter()
            .filter(|c| !has(c))
            .map(ToString::to_string)
            .collect(),
        ignored: headers
            .iter()
            .filter(|h| {
                let h = h.as_str();
                CLEANED_COLUMNS.contains(&h)
                    && !REQUIRED_COLUMNS.contains(&h)
                    && !OPTIONAL_COLUMNS.contains(&h)
            })
            .cloned()
            .collect(),
        passthrough: headers
            .iter()
            .filter(|h| !h.is_empty() && !CLEANED_COLUMNS.contains(&h.as_str()))
            .unique()
            .cloned()
            .collect(),
    }
}
