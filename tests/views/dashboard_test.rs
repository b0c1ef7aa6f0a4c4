use std::sync::Arc;

use assist_dash::schema::{CLEANED_COLUMNS, DAYS_TO_SUPPORT};
use assist_dash::{
    CleanedTable, Dashboard, DashboardConfig, Dimension, PageResult, SignedFilter, ViewOutput,
    ViewRequest,
};

use crate::utils::{application, table};

fn dashboard(t: CleanedTable) -> Dashboard {
    Dashboard::new(Arc::new(t), DashboardConfig::default()).unwrap()
}

#[test]
fn test_repeated_requests_hit_the_cache() {
    let mut dash = dashboard(table(vec![
        application("P1", "CA", 100.0),
        application("P2", "CA", 200.0),
        application("P3", "NY", 50.0),
    ]));

    let request = ViewRequest::SupportByDemographics(Dimension::State);
    let first = dash.render(request).unwrap();
    let second = dash.render(request).unwrap();
    assert_eq!(first, second);
    assert_eq!(dash.cached_views(), 1);

    dash.render(ViewRequest::SupportByDemographics(Dimension::City)).unwrap();
    assert_eq!(dash.cached_views(), 2);
}

#[test]
fn test_all_pages_render() {
    let mut dash = dashboard(table(vec![application("P1", "CA", 100.0)]));
    let pages = ViewRequest::pages(SignedFilter::All, Dimension::State);
    let rendered = dash.render_all(&pages);

    assert_eq!(rendered.len(), 5);
    assert!(
        rendered
            .iter()
            .all(|(_, page)| matches!(page, PageResult::Rendered(_)))
    );
    match &rendered[1].1 {
        PageResult::Rendered(ViewOutput::SupportByDemographics(groups)) => {
            assert_eq!(groups.len(), 1);
            assert_eq!(groups[0].total_amount, 100.0);
        }
        other => panic!("unexpected page: {other:?}"),
    }
}

#[test]
fn test_failing_view_becomes_notice_without_affecting_others() {
    let columns: Vec<String> = CLEANED_COLUMNS
        .iter()
        .filter(|c| **c != DAYS_TO_SUPPORT)
        .map(ToString::to_string)
        .collect();
    let t = CleanedTable::with_columns(vec![application("P1", "CA", 100.0)], columns);
    let mut dash = dashboard(t);

    let rendered = dash.render_all(&ViewRequest::pages(SignedFilter::No, Dimension::Gender));
    for (request, page) in &rendered {
        match (request, page) {
            (ViewRequest::TimeToSupport, PageResult::Notice(message)) => {
                assert!(message.contains("Time to Support"));
            }
            (ViewRequest::TimeToSupport, other) => panic!("expected a notice, got {other:?}"),
            (_, PageResult::Rendered(_)) => {}
            (request, other) => panic!("{} failed: {other:?}", request.title()),
        }
    }
    // Failures are not memoized
    assert_eq!(dash.cached_views(), 4);
}

#[test]
fn test_fingerprint_tracks_content() {
    let a = dashboard(table(vec![application("P1", "CA", 100.0)]));
    let b = dashboard(table(vec![application("P1", "CA", 100.0)]));
    let c = dashboard(table(vec![application("P1", "CA", 101.0)]));
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), c.fingerprint());
}
