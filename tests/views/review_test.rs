use assist_dash::SignedFilter;
use assist_dash::algorithm::views::ready_for_review;

use crate::utils::{application, table};

fn applications() -> assist_dash::CleanedTable {
    let unsigned = application("P1", "CA", 100.0);
    let mut signed = application("P2", "CA", 50.0);
    signed.application_signed = Some("yes".to_string());
    signed.ready_for_review = false;
    let mut denied = application("P3", "NY", 75.0);
    denied.request_status = Some("denied".to_string());
    denied.ready_for_review = false;
    let mut unknown = application("P4", "IA", 10.0);
    unknown.application_signed = None;

    table(vec![unsigned, signed, denied, unknown])
}

fn ids(entries: &[assist_dash::algorithm::views::ReviewEntry]) -> Vec<&str> {
    entries
        .iter()
        .filter_map(|e| e.record.patient_id.as_deref())
        .collect()
}

#[test]
fn test_all_shows_every_approved_application() {
    let entries = ready_for_review(&applications(), SignedFilter::All);
    assert_eq!(ids(&entries), vec!["P1", "P2", "P4"]);
    let flags: Vec<bool> = entries.iter().map(|e| e.review_needed).collect();
    assert_eq!(flags, vec![true, false, true]);
}

#[test]
fn test_signed_filters() {
    let t = applications();
    assert_eq!(ids(&ready_for_review(&t, SignedFilter::Yes)), vec!["P2"]);
    assert_eq!(ids(&ready_for_review(&t, SignedFilter::No)), vec!["P1"]);
}

#[test]
fn test_no_approved_rows() {
    let mut denied = application("P1", "CA", 1.0);
    denied.request_status = Some("denied".to_string());
    assert!(ready_for_review(&table(vec![denied]), SignedFilter::All).is_empty());
}
