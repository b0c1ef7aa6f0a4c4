//! Ready for Review page: approved applications with a review indicator

use serde::{Deserialize, Serialize};

use crate::models::{ApplicationRecord, CleanedTable};

/// Filter on `Application_Signed?`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignedFilter {
    /// No filter
    #[default]
    All,
    /// Signed applications only
    Yes,
    /// Unsigned applications only
    No,
}

impl SignedFilter {
    /// Parse a selection; anything unrecognized means no filter
    #[must_use]
    pub fn parse(selection: &str) -> Self {
        match selection.trim().to_lowercase().as_str() {
            "all" => Self::All,
            "yes" => Self::Yes,
            "no" => Self::No,
            other => {
                log::warn!("Unrecognized signed filter {other:?}, showing all");
                Self::All
            }
        }
    }

    /// Selection label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Whether a signature status passes the filter
    #[must_use]
    pub fn matches(self, application_signed: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Yes | Self::No => application_signed == Some(self.as_str()),
        }
    }
}

/// An approved application and whether it still needs review
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewEntry {
    /// The cleaned application
    pub record: ApplicationRecord,
    /// Binary rendering of `Ready_for_Review`
    pub review_needed: bool,
}

/// Approved applications, optionally narrowed by signature status
#[must_use]
pub fn ready_for_review(table: &CleanedTable, filter: SignedFilter) -> Vec<ReviewEntry> {
    table
        .approved()
        .filter(|r| filter.matches(r.application_signed.as_deref()))
        .map(|r| ReviewEntry {
            record: r.clone(),
            review_needed: r.ready_for_review,
        })
        .collect()
}
