//! Grant Usage & Budgeting page
//!
//! Works on approved applications that have a remaining balance and a
//! positive amount. The remaining balance is read as the view-local
//! `Unused_Amount`.

use serde::Serialize;

use super::grouping::{MeanAccumulator, OrderedGroups, distinct_count};
use crate::models::{ApplicationRecord, CleanedTable};

/// Unused grant money for one application year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearUsage {
    /// Application year
    pub year: i32,
    /// Distinct patients with a balance above zero
    pub patients_with_balance: usize,
    /// Sum of remaining balances
    pub unused_amount: f64,
}

/// Average grant for one assistance class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistanceAverage {
    /// Assistance class
    pub assistance_type: String,
    /// Applications in the class
    pub applications: usize,
    /// Mean `Amount`
    pub mean_amount: Option<f64>,
}

/// Both summary tables of the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrantUsage {
    /// Unused amounts by application year
    pub unused_by_year: Vec<YearUsage>,
    /// Mean amount by assistance class
    pub avg_by_assistance_type: Vec<AssistanceAverage>,
}

#[derive(Debug, Default)]
struct YearAccumulator<'a> {
    ids_with_balance: Vec<Option<&'a str>>,
    unused: f64,
}

fn in_scope(record: &ApplicationRecord) -> bool {
    record.is_approved()
        && record.remaining_balance.is_some()
        && record.amount.is_some_and(|a| a > 0.0)
}

/// Compute the usage tables
#[must_use]
pub fn grant_usage(table: &CleanedTable) -> GrantUsage {
    let mut by_year: OrderedGroups<i32, YearAccumulator<'_>> = OrderedGroups::new();
    let mut by_type: OrderedGroups<String, MeanAccumulator> = OrderedGroups::new();

    for record in table.records().iter().filter(|r| in_scope(r)) {
        let balance = record.remaining_balance.unwrap_or(0.0);

        if let Some(year) = record.app_year {
            let acc = by_year.entry(year);
            acc.unused += balance;
            if balance > 0.0 {
                acc.ids_with_balance.push(record.patient_id.as_deref());
            }
        }

        if let Some(kind) = &record.assistance_type {
            by_type.entry(kind.clone()).push(record.amount);
        }
    }

    GrantUsage {
        unused_by_year: by_year
            .into_entries()
            .into_iter()
            .map(|(year, acc)| YearUsage {
                year,
                patients_with_balance: distinct_count(acc.ids_with_balance),
                unused_amount: acc.unused,
            })
            .collect(),
        avg_by_assistance_type: by_type
            .into_entries()
            .into_iter()
            .map(|(assistance_type, acc)| AssistanceAverage {
                assistance_type,
                applications: acc.count(),
                mean_amount: acc.mean(),
            })
            .collect(),
    }
}
