use assist_dash::algorithm::views::{DelayBucket, time_to_support};
use assist_dash::schema::{CLEANED_COLUMNS, DAYS_TO_SUPPORT, SUPPORT_SENT_DATE};
use assist_dash::{CleanedTable, ViewError};

use crate::utils::{application, date, table};

fn with_delay(id: &str, days: Option<u32>) -> assist_dash::ApplicationRecord {
    let mut record = application(id, "CA", 10.0);
    record.days_to_support = days;
    record
}

#[test]
fn test_mean_histogram_and_sample() {
    let t = table(vec![
        with_delay("P1", Some(7)),
        with_delay("P2", Some(5)),
        with_delay("P3", Some(7)),
        with_delay("P4", None),
        with_delay("P5", Some(9)),
    ]);

    let view = time_to_support(&t, 3).unwrap();
    assert_eq!(view.mean_days, Some(7.0));
    assert_eq!(
        view.histogram,
        vec![
            DelayBucket { days: 5, count: 1 },
            DelayBucket { days: 7, count: 2 },
            DelayBucket { days: 9, count: 1 },
        ]
    );
    assert_eq!(view.sample.len(), 3);
    assert_eq!(view.sample[0].grant_req_date, Some(date(2021, 1, 1)));
    assert_eq!(view.sample[0].support_sent_date, Some(date(2021, 1, 8)));
    assert_eq!(view.sample[1].days_to_support, Some(5));
}

#[test]
fn test_empty_table_has_no_mean() {
    let view = time_to_support(&table(Vec::new()), 10).unwrap();
    assert_eq!(view.mean_days, None);
    assert!(view.histogram.is_empty());
    assert!(view.sample.is_empty());
}

#[test]
fn test_unavailable_without_delay_column() {
    let columns: Vec<String> = CLEANED_COLUMNS
        .iter()
        .filter(|c| **c != DAYS_TO_SUPPORT && **c != SUPPORT_SENT_DATE)
        .map(ToString::to_string)
        .collect();
    let t = CleanedTable::with_columns(vec![with_delay("P1", None)], columns);

    let err = time_to_support(&t, 10).unwrap_err();
    assert!(matches!(err, ViewError::Unavailable { .. }));
    assert!(err.to_string().contains(DAYS_TO_SUPPORT));
}
