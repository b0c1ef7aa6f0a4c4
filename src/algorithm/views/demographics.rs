//! Support by Demographics page: total `Amount` per group

use serde::{Deserialize, Serialize};

use super::grouping::OrderedGroups;
use crate::error::ViewError;
use crate::models::{ApplicationRecord, CleanedTable};
use crate::schema;
use crate::schema::adapt::normalize_text;

/// Title of the page
pub const TITLE: &str = "Support by Demographics";

/// Label of the single group of an ungrouped selection
pub const ALL_LABEL: &str = "All";

/// Grouping dimension offered by the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// `Pt_City`
    City,
    /// `Pt_State`
    State,
    /// `Gender`
    Gender,
    /// `Insurance_Type`
    InsuranceType,
    /// `App_Year`
    AppYear,
    /// `Income`, a passthrough column of the source spreadsheet
    Income,
    /// No grouping; one total over every record
    #[default]
    Ungrouped,
}

impl Dimension {
    /// Every selectable dimension, in menu order
    pub const ALL: [Self; 7] = [
        Self::Ungrouped,
        Self::City,
        Self::State,
        Self::Gender,
        Self::InsuranceType,
        Self::AppYear,
        Self::Income,
    ];

    /// Parse a selection by short name or column name
    ///
    /// An unrecognized selection applies no grouping.
    #[must_use]
    pub fn parse(selection: &str) -> Self {
        let key = selection.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| {
                key == d.short_name() || d.column().is_some_and(|c| key == c.to_lowercase())
            })
            .unwrap_or_else(|| {
                log::warn!("Unrecognized grouping {selection:?}, showing a single total");
                Self::Ungrouped
            })
    }

    /// Selection name
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::State => "state",
            Self::Gender => "gender",
            Self::InsuranceType => "insurance",
            Self::AppYear => "year",
            Self::Income => "income",
            Self::Ungrouped => "all",
        }
    }

    /// Column the dimension reads; `None` when ungrouped
    #[must_use]
    pub const fn column(self) -> Option<&'static str> {
        match self {
            Self::City => Some(schema::PT_CITY),
            Self::State => Some(schema::PT_STATE),
            Self::Gender => Some(schema::GENDER),
            Self::InsuranceType => Some(schema::INSURANCE_TYPE),
            Self::AppYear => Some(schema::APP_YEAR),
            Self::Income => Some(schema::INCOME),
            Self::Ungrouped => None,
        }
    }

    /// Group label of a record; `None` when the value is missing
    #[must_use]
    pub fn label(self, table: &CleanedTable, record: &ApplicationRecord) -> Option<String> {
        match self {
            Self::City => record.pt_city.clone(),
            Self::State => record.pt_state.clone(),
            Self::Gender => Some(record.gender.to_string()),
            Self::InsuranceType => Some(record.insurance_type.to_string()),
            Self::AppYear => record.app_year.map(|y| y.to_string()),
            Self::Income => table
                .passthrough_value(record, schema::INCOME)
                .and_then(normalize_text),
            Self::Ungrouped => Some(ALL_LABEL.to_string()),
        }
    }
}

/// Total support for one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    /// Group label
    pub label: String,
    /// Sum of present `Amount` values
    pub total_amount: f64,
}

/// Sum `Amount` per group of `dimension`; rows with a missing label are left out
///
/// Grouping by a column the table does not carry makes the page unavailable.
pub fn support_by_demographics(
    table: &CleanedTable,
    dimension: Dimension,
) -> Result<Vec<GroupTotal>, ViewError> {
    if let Some(column) = dimension.column() {
        if !table.has_column(column) {
            return Err(ViewError::Unavailable {
                view: TITLE,
                reason: format!("column {column} is not in the cleaned data"),
            });
        }
    }

    let mut groups: OrderedGroups<String, f64> = OrderedGroups::new();
    for record in table.records() {
        if let Some(label) = dimension.label(table, record) {
            *groups.entry(label) += record.amount.unwrap_or(0.0);
        }
    }

    Ok(groups
        .into_entries()
        .into_iter()
        .map(|(label, total_amount)| GroupTotal {
            label,
            total_amount,
        })
        .collect())
}
