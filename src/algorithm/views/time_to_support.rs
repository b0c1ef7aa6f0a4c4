//! Time to Support page: distribution of the simulated delays

use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;

use super::grouping::MeanAccumulator;
use crate::error::ViewError;
use crate::models::CleanedTable;
use crate::schema::DAYS_TO_SUPPORT;

/// Title of the page
pub const TITLE: &str = "Time to Support";

/// Number of applications with a given delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DelayBucket {
    /// Delay in days
    pub days: u32,
    /// Applications with that delay
    pub count: usize,
}

/// One row of the sample table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelaySample {
    /// Request date
    pub grant_req_date: Option<NaiveDate>,
    /// Simulated support date
    pub support_sent_date: Option<NaiveDate>,
    /// Simulated delay
    pub days_to_support: Option<u32>,
}

/// Aggregates shown on the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeToSupport {
    /// Mean delay, `None` for an empty table
    pub mean_days: Option<f64>,
    /// Delay histogram in ascending order of days
    pub histogram: Vec<DelayBucket>,
    /// First rows of the table
    pub sample: Vec<DelaySample>,
}

/// Delay statistics over the whole table
///
/// Artifacts written before delays were simulated lack `Days_To_Support`;
/// the page then reports itself unavailable.
pub fn time_to_support(
    table: &CleanedTable,
    sample_size: usize,
) -> Result<TimeToSupport, ViewError> {
    if !table.has_column(DAYS_TO_SUPPORT) {
        return Err(ViewError::Unavailable {
            view: TITLE,
            reason: format!("column {DAYS_TO_SUPPORT} is not in the cleaned data"),
        });
    }

    let delays = table.records().iter().filter_map(|r| r.days_to_support);

    let mut mean = MeanAccumulator::default();
    for days in delays.clone() {
        mean.push(Some(f64::from(days)));
    }

    let histogram = delays
        .counts()
        .into_iter()
        .sorted_unstable_by_key(|(days, _)| *days)
        .map(|(days, count)| DelayBucket { days, count })
        .collect();

    let sample = table
        .records()
        .iter()
        .take(sample_size)
        .map(|r| DelaySample {
            grant_req_date: r.grant_req_date,
            support_sent_date: r.support_sent_date,
            days_to_support: r.days_to_support,
        })
        .collect();

    Ok(TimeToSupport {
        mean_days: mean.mean(),
        histogram,
        sample,
    })
}
