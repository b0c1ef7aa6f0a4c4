//! Console output utilities
//!
//! Plain-text rendering of dashboard pages and the cleaning report.

use std::fmt::Write;

use crate::algorithm::PageResult;
use crate::algorithm::views::{
    AnnualImpact, GrantUsage, GroupTotal, ReviewEntry, TimeToSupport, ViewOutput, ViewRequest,
};
use crate::pipeline::CleaningReport;

/// Rows of the review table printed before truncating
const MAX_REVIEW_ROWS: usize = 25;

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn opt_amount(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

/// Format one page as text
#[must_use]
pub fn format_page(request: &ViewRequest, page: &PageResult) -> String {
    let mut out = String::new();
    let title = request.title();
    let _ = writeln!(out, "{title}\n{}", "=".repeat(title.len()));

    match page {
        PageResult::Notice(notice) => {
            let _ = writeln!(out, "! {notice}");
        }
        PageResult::Rendered(output) => match output {
            ViewOutput::ReadyForReview(entries) => format_review(&mut out, entries),
            ViewOutput::SupportByDemographics(groups) => format_groups(&mut out, request, groups),
            ViewOutput::TimeToSupport(stats) => format_delays(&mut out, stats),
            ViewOutput::GrantUsage(usage) => format_usage(&mut out, usage),
            ViewOutput::AnnualImpact(impact) => format_impact(&mut out, impact),
        },
    }
    out
}

/// Print one page to stdout
pub fn print_page(request: &ViewRequest, page: &PageResult) {
    println!("{}", format_page(request, page));
}

/// Print the cleaning counters to stdout
pub fn print_cleaning_report(report: &CleaningReport) {
    println!("Rows read:            {}", report.rows_read);
    println!("Rows written:         {}", report.rows_written);
    println!("Dropped (state NAN):  {}", report.rows_dropped_invalid_state);
    println!("Unparseable dates:    {}", report.unparseable_dates);
    println!("Unparseable amounts:  {}", report.unparseable_amounts);
    println!("Unparseable balances: {}", report.unparseable_balances);
    if !report.passthrough_columns.is_empty() {
        println!("Passthrough columns:  {}", report.passthrough_columns.join(", "));
    }
    println!();
}

fn format_review(out: &mut String, entries: &[ReviewEntry]) {
    let _ = writeln!(out, "{} approved applications", entries.len());
    let _ = writeln!(
        out,
        "{:<12} {:<12} {:<8} {:>10} {:<7} {}",
        "Patient", "Requested", "Signed", "Amount", "Review", "Assistance"
    );
    for entry in entries.iter().take(MAX_REVIEW_ROWS) {
        let r = &entry.record;
        let _ = writeln!(
            out,
            "{:<12} {:<12} {:<8} {:>10} {:<7} {}",
            opt(r.patient_id.as_deref()),
            opt(r.grant_req_date),
            opt(r.application_signed.as_deref()),
            opt_amount(r.amount),
            if entry.review_needed { "yes" } else { "no" },
            opt(r.assistance_type.as_deref()),
        );
    }
    if entries.len() > MAX_REVIEW_ROWS {
        let _ = writeln!(out, "... {} more", entries.len() - MAX_REVIEW_ROWS);
    }
}

fn format_groups(out: &mut String, request: &ViewRequest, groups: &[GroupTotal]) {
    if let ViewRequest::SupportByDemographics(dimension) = request {
        match dimension.column() {
            Some(column) => {
                let _ = writeln!(out, "Grouped by {column}");
            }
            None => {
                let _ = writeln!(out, "Ungrouped");
            }
        }
    }
    for group in groups {
        let _ = writeln!(out, "{:<24} {:>12.2}", group.label, group.total_amount);
    }
}

fn format_delays(out: &mut String, stats: &TimeToSupport) {
    let _ = writeln!(
        out,
        "Average days to support: {}",
        opt_amount(stats.mean_days)
    );
    let _ = writeln!(out, "Distribution:");
    for bucket in &stats.histogram {
        let _ = writeln!(out, "{:>4} days {:>6}", bucket.days, bucket.count);
    }
    let _ = writeln!(out, "Sample (requested, sent, days):");
    for row in &stats.sample {
        let _ = writeln!(
            out,
            "{:<12} {:<12} {}",
            opt(row.grant_req_date),
            opt(row.support_sent_date),
            opt(row.days_to_support)
        );
    }
}

fn format_usage(out: &mut String, usage: &GrantUsage) {
    let _ = writeln!(out, "Unused grant amounts by application year:");
    for year in &usage.unused_by_year {
        let _ = writeln!(
            out,
            "{:<6} {:>12.2} ({} patients with balance)",
            year.year, year.unused_amount, year.patients_with_balance
        );
    }
    let _ = writeln!(out, "Average support amount by assistance type:");
    for avg in &usage.avg_by_assistance_type {
        let _ = writeln!(
            out,
            "{:<24} {:>12} ({} applications)",
            avg.assistance_type,
            opt_amount(avg.mean_amount),
            avg.applications
        );
    }
}

fn format_impact(out: &mut String, impact: &AnnualImpact) {
    let s = &impact.summary;
    let _ = writeln!(out, "Patients supported:      {}", s.total_patients);
    let _ = writeln!(out, "Approved applications:   {}", s.total_applications);
    let _ = writeln!(out, "Total support:           {:.2}", s.total_support);
    let _ = writeln!(out, "Average grant:           {}", opt_amount(s.avg_support));
    let _ = writeln!(
        out,
        "Most common assistance:  {}",
        opt(s.top_assistance_type.as_deref())
    );
    let _ = writeln!(
        out,
        "Average days to support: {}",
        opt_amount(s.avg_days_to_support)
    );
    let _ = writeln!(out, "By year:");
    for year in &impact.by_year {
        let _ = writeln!(
            out,
            "{:<6} {:>12.2} {:>6} patients  avg {}",
            year.year,
            year.total_support,
            year.patients,
            opt_amount(year.avg_support)
        );
    }
}
