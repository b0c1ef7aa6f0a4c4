//! The five dashboard views
//!
//! Every view is a pure function of the cleaned table and a few enumerated
//! parameters. None of them modify the table.

pub mod annual_impact;
pub mod demographics;
pub mod grant_usage;
pub mod grouping;
pub mod review;
pub mod time_to_support;

pub use annual_impact::{AnnualImpact, ImpactSummary, YearImpact, annual_impact};
pub use demographics::{Dimension, GroupTotal, support_by_demographics};
pub use grant_usage::{AssistanceAverage, GrantUsage, YearUsage, grant_usage};
pub use review::{ReviewEntry, SignedFilter, ready_for_review};
pub use time_to_support::{DelayBucket, DelaySample, TimeToSupport, time_to_support};

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::error::ViewError;
use crate::models::CleanedTable;

/// A page selection with its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewRequest {
    /// Approved applications, filtered by signature status
    ReadyForReview(SignedFilter),
    /// Total support grouped by a dimension
    SupportByDemographics(Dimension),
    /// Delay statistics
    TimeToSupport,
    /// Unused amounts and averages by assistance class
    GrantUsage,
    /// Overall and yearly impact
    AnnualImpact,
}

impl ViewRequest {
    /// Page title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ReadyForReview(_) => "Ready for Review",
            Self::SupportByDemographics(_) => demographics::TITLE,
            Self::TimeToSupport => time_to_support::TITLE,
            Self::GrantUsage => "Grant Usage & Budgeting",
            Self::AnnualImpact => "Annual Impact Summary",
        }
    }

    /// All five pages with the given parameter selections
    #[must_use]
    pub const fn pages(signed: SignedFilter, dimension: Dimension) -> [Self; 5] {
        [
            Self::ReadyForReview(signed),
            Self::SupportByDemographics(dimension),
            Self::TimeToSupport,
            Self::GrantUsage,
            Self::AnnualImpact,
        ]
    }
}

/// Output of one view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "data")]
pub enum ViewOutput {
    /// Rows of the Ready for Review page
    ReadyForReview(Vec<ReviewEntry>),
    /// Group totals
    SupportByDemographics(Vec<GroupTotal>),
    /// Delay statistics
    TimeToSupport(TimeToSupport),
    /// Usage tables
    GrantUsage(GrantUsage),
    /// Impact summary
    AnnualImpact(AnnualImpact),
}

/// Compute one view over `table`
pub fn compute_view(
    table: &CleanedTable,
    request: ViewRequest,
    config: &DashboardConfig,
) -> Result<ViewOutput, ViewError> {
    Ok(match request {
        ViewRequest::ReadyForReview(filter) => {
            ViewOutput::ReadyForReview(ready_for_review(table, filter))
        }
        ViewRequest::SupportByDemographics(dimension) => {
            ViewOutput::SupportByDemographics(support_by_demographics(table, dimension)?)
        }
        ViewRequest::TimeToSupport => {
            ViewOutput::TimeToSupport(time_to_support(table, config.sample_size)?)
        }
        ViewRequest::GrantUsage => ViewOutput::GrantUsage(grant_usage(table)),
        ViewRequest::AnnualImpact => ViewOutput::AnnualImpact(annual_impact(table)),
    })
}
