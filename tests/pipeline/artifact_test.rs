use std::sync::Arc;

use assist_dash::schema::{CLEANED_COLUMNS, DAYS_TO_SUPPORT, INCOME, SUPPORT_SENT_DATE};
use assist_dash::utils::io::fingerprint;
use assist_dash::{
    CleaningPipeline, Dashboard, DashboardConfig, Dimension, Gender, InsuranceType, PageResult,
    SignedFilter, ViewRequest, read_cleaned, write_cleaned,
};

use crate::utils::{RawRow, application, date, raw_table, table, write_raw_csv};

fn sample_rows() -> Vec<RawRow> {
    vec![
        RawRow {
            patient_id: "P001",
            state: "ca",
            amount: "150.5",
            ..RawRow::default()
        },
        RawRow {
            patient_id: "P002",
            state: "nan",
            ..RawRow::default()
        },
        RawRow {
            patient_id: "P003",
            status: "denied",
            grant_req_date: "Missing",
            amount: "",
            ..RawRow::default()
        },
        RawRow {
            patient_id: "P004",
            city: "Lincoln",
            gender: "woman",
            signed: "Yes",
            balance: "25.25",
            ..RawRow::default()
        },
    ]
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_raw_csv(dir.path(), "raw.csv", &sample_rows());
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    let pipeline = CleaningPipeline::default();
    pipeline.run(&input, &first).unwrap();
    pipeline.run(&input, &second).unwrap();

    let a = std::fs::read(&first).unwrap();
    let b = std::fs::read(&second).unwrap();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn test_artifact_header_follows_column_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_raw_csv(dir.path(), "raw.csv", &sample_rows());
    let output = dir.path().join("cleaned_data.csv");
    CleaningPipeline::default().run(&input, &output).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    let header = text.lines().next().unwrap();
    assert_eq!(header, CLEANED_COLUMNS.join(","));
    // Three surviving rows plus the header
    assert_eq!(text.lines().count(), 4);
    assert!(!dir.path().join("cleaned_data.csv.partial").exists());
}

#[test]
fn test_csv_artifact_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let (cleaned, _) = CleaningPipeline::default()
        .clean(raw_table(&sample_rows()))
        .unwrap();

    let path = dir.path().join("cleaned_data.csv");
    write_cleaned(&path, &cleaned).unwrap();
    let loaded = read_cleaned(&path).unwrap();

    assert_eq!(loaded.records(), cleaned.records());
    assert!(loaded.has_column(DAYS_TO_SUPPORT));
    assert_eq!(fingerprint(&loaded).unwrap(), fingerprint(&cleaned).unwrap());
}

#[test]
fn test_parquet_artifact_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let (cleaned, _) = CleaningPipeline::default()
        .clean(raw_table(&sample_rows()))
        .unwrap();

    let path = dir.path().join("cleaned_data.parquet");
    write_cleaned(&path, &cleaned).unwrap();
    let loaded = read_cleaned(&path).unwrap();

    assert_eq!(loaded.records(), cleaned.records());
    assert_eq!(loaded.columns().len(), CLEANED_COLUMNS.len());
}

#[test]
fn test_empty_table_still_has_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    write_cleaned(&path, &table(Vec::new())).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.trim_end(), CLEANED_COLUMNS.join(","));
    assert!(read_cleaned(&path).unwrap().is_empty());
}

#[test]
fn test_older_artifact_without_delay_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("old.csv");

    let mut full = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut full);
        for record in [application("P1", "CA", 100.0), application("P2", "NY", 50.0)] {
            writer.serialize(record).unwrap();
        }
        writer.flush().unwrap();
    }
    // Drop the two trailing delay columns from every line
    let text = String::from_utf8(full).unwrap();
    let old: String = text
        .lines()
        .map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            format!("{}\n", fields[..fields.len() - 2].join(","))
        })
        .collect();
    std::fs::write(&path, old).unwrap();

    let loaded = read_cleaned(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(!loaded.has_column(DAYS_TO_SUPPORT));
    assert!(!loaded.has_column(SUPPORT_SENT_DATE));
    assert!(loaded.records().iter().all(|r| r.days_to_support.is_none()));
    assert_eq!(loaded.records()[0].amount, Some(100.0));
}

/// A cleaned file as a pandas `to_csv` dump writes it: capitalized booleans,
/// float years, a datetime, no delay columns and an extra `Income` column
const PANDAS_ARTIFACT: &str = "\
Patient_ID#,Grant_Req_Date,App_Year,Pt_City,Pt_State,Gender,Insurance_Type,\
Type_of_Assistance_CLASS,Request_Status,Application_Signed?,Payment_Submitted?,\
Amount,Remaining_Balance,Ready_for_Review,Income
P1,2021-01-01,2021.0,Omaha,NE,Male,Medicaid,Rent,approved,no,yes,100.0,0.0,True,Under 25k
P2,2022-03-04 00:00:00,2022.0,Lincoln,NE,robot,Marketplace,Utilities,denied,yes,no,,12.5,False,
";

#[test]
fn test_loads_pandas_style_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cleaned_data.csv");
    std::fs::write(&path, PANDAS_ARTIFACT).unwrap();

    let loaded = read_cleaned(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(!loaded.has_column(DAYS_TO_SUPPORT));
    assert_eq!(loaded.passthrough_columns(), [INCOME.to_string()]);

    let (first, second) = (&loaded.records()[0], &loaded.records()[1]);
    assert!(first.ready_for_review);
    assert!(!second.ready_for_review);
    assert_eq!(first.app_year, Some(2021));
    assert_eq!(second.app_year, Some(2022));
    assert_eq!(second.grant_req_date, Some(date(2022, 3, 4)));
    assert_eq!(second.gender, Gender::Other);
    assert_eq!(second.insurance_type, InsuranceType::Private);
    assert_eq!(second.amount, None);
    assert_eq!(loaded.passthrough_value(first, INCOME), Some("Under 25k"));
    assert_eq!(loaded.passthrough_value(second, INCOME), None);

    let mut dash = Dashboard::new(Arc::new(loaded), DashboardConfig::default()).unwrap();
    let rendered = dash.render_all(&ViewRequest::pages(SignedFilter::All, Dimension::Income));
    for (request, page) in &rendered {
        match (request, page) {
            (ViewRequest::TimeToSupport, PageResult::Notice(_)) => {}
            (_, PageResult::Rendered(_)) if *request != ViewRequest::TimeToSupport => {}
            (request, other) => panic!("{} rendered as {other:?}", request.title()),
        }
    }
}

#[test]
fn test_passthrough_column_survives_clean_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    let mut writer = csv::Writer::from_path(&input).unwrap();
    let mut header: Vec<&str> = crate::utils::RAW_HEADERS.to_vec();
    header.push(" Income ");
    writer.write_record(&header).unwrap();
    for (row, income) in sample_rows().iter().zip(["52000", "1", "Missing", "18000"]) {
        let mut cells = row.cells().to_vec();
        cells.push(income);
        writer.write_record(&cells).unwrap();
    }
    writer.flush().unwrap();

    for name in ["cleaned_data.csv", "cleaned_data.parquet"] {
        let output = dir.path().join(name);
        let report = CleaningPipeline::default().run(&input, &output).unwrap();
        assert_eq!(report.passthrough_columns, vec![INCOME.to_string()]);

        let loaded = read_cleaned(&output).unwrap();
        assert_eq!(loaded.columns().last().map(String::as_str), Some(INCOME));
        let incomes: Vec<Option<&str>> = loaded
            .records()
            .iter()
            .map(|r| loaded.passthrough_value(r, INCOME))
            .collect();
        // The "nan" state row is dropped and the sentinel becomes missing
        assert_eq!(incomes, vec![Some("52000"), None, Some("18000")]);
    }
}

#[test]
fn test_missing_artifact_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_cleaned(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, assist_dash::AssistError::Io(_)));
}
