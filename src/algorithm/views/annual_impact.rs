//! Annual Impact Summary page over approved applications

use serde::Serialize;

use super::grouping::{MeanAccumulator, OrderedGroups, distinct_count, first_mode};
use crate::models::CleanedTable;
use crate::schema::DAYS_TO_SUPPORT;

/// Headline figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactSummary {
    /// Distinct patients supported
    pub total_patients: usize,
    /// Approved applications
    pub total_applications: usize,
    /// Total `Amount`
    pub total_support: f64,
    /// Mean `Amount`, `None` without amounts
    pub avg_support: Option<f64>,
    /// Most frequent assistance class
    pub top_assistance_type: Option<String>,
    /// Mean simulated delay, `None` when unavailable
    pub avg_days_to_support: Option<f64>,
}

/// Trend row for one application year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearImpact {
    /// Application year
    pub year: i32,
    /// Distinct patients
    pub patients: usize,
    /// Total `Amount`
    pub total_support: f64,
    /// Mean `Amount`
    pub avg_support: Option<f64>,
}

/// Summary block and year trend table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualImpact {
    /// Overall figures
    pub summary: ImpactSummary,
    /// Figures per application year
    pub by_year: Vec<YearImpact>,
}

#[derive(Debug, Default)]
struct YearAccumulator<'a> {
    ids: Vec<Option<&'a str>>,
    amounts: MeanAccumulator,
}

/// Compute the impact summary
#[must_use]
pub fn annual_impact(table: &CleanedTable) -> AnnualImpact {
    let approved: Vec<_> = table.approved().collect();

    let mut amounts = MeanAccumulator::default();
    let mut delays = MeanAccumulator::default();
    let mut by_year: OrderedGroups<i32, YearAccumulator<'_>> = OrderedGroups::new();

    for record in &approved {
        amounts.push(record.amount);
        delays.push(record.days_to_support.map(f64::from));
        if let Some(year) = record.app_year {
            let acc = by_year.entry(year);
            acc.ids.push(record.patient_id.as_deref());
            acc.amounts.push(record.amount);
        }
    }

    let summary = ImpactSummary {
        total_patients: distinct_count(approved.iter().map(|r| r.patient_id.as_deref())),
        total_applications: approved.len(),
        total_support: amounts.sum(),
        avg_support: amounts.mean(),
        top_assistance_type: first_mode(approved.iter().map(|r| r.assistance_type.as_deref())),
        avg_days_to_support: if table.has_column(DAYS_TO_SUPPORT) {
            delays.mean()
        } else {
            None
        },
    };

    let by_year = by_year
        .into_entries()
        .into_iter()
        .map(|(year, acc)| YearImpact {
            year,
            patients: distinct_count(acc.ids),
            total_support: acc.amounts.sum(),
            avg_support: acc.amounts.mean(),
        })
        .collect();

    AnnualImpact { summary, by_year }
}
