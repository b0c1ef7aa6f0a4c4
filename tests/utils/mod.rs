
use std::path::{Path, PathBuf};

use assist_dash::{ApplicationRecord, CleanedTable, Gender, InsuranceType, RawTable};
use chrono::NaiveDate;

/// Raw headers as they appear in the source spreadsheet, before normalization
pub const RAW_HEADERS: [&str; 13] = [
    "Patient ID#",
    "Grant Req Date",
    "App Year",
    "Pt City",
    " Pt State ",
    "Gender",
    "Insurance Type",
    "Type of Assistance (CLASS)",
    "Request Status",
    "Application Signed?",
    "Payment Submitted?",
    "Amount",
    "Remaining Balance",
];

/// One raw spreadsheet row; empty strings are empty cells
#[derive(Debug, Clone)]
pub struct RawRow {
    pub patient_id: &'static str,
    pub grant_req_date: &'static str,
    pub app_year: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub gender: &'static str,
    pub insurance: &'static str,
    pub assistance: &'static str,
    pub status: &'static str,
    pub signed: &'static str,
    pub payment: &'static str,
    pub amount: &'static str,
    pub balance: &'static str,
}

impl Default for RawRow {
    fn default() -> Self {
        Self {
            patient_id: "P001",
            grant_req_date: "2021-01-01",
            app_year: "",
            city: "Omaha",
            state: "NE",
            gender: "Female",
            insurance: "Medicaid",
            assistance: "Rent",
            status: "Approved",
            signed: "No",
            payment: "Yes",
            amount: "100",
            balance: "0",
        }
    }
}

impl RawRow {
    pub fn cells(&self) -> [&'static str; 13] {
        [
            self.patient_id,
            self.grant_req_date,
            self.app_year,
            self.city,
            self.state,
            self.gender,
            self.insurance,
            self.assistance,
            self.status,
            self.signed,
            self.payment,
            self.amount,
            self.balance,
        ]
    }
}

/// Build an in-memory raw table
#[must_use]
pub fn raw_table(rows: &[RawRow]) -> RawTable {
    RawTable::new(
        RAW_HEADERS.iter().map(ToString::to_string).collect(),
        rows.iter()
            .map(|row| {
                row.cells()
                    .iter()
                    .map(|c| (!c.is_empty()).then(|| (*c).to_string()))
                    .collect()
            })
            .collect(),
    )
}

/// Write rows as a raw CSV file in `dir`
pub fn write_raw_csv(dir: &Path, name: &str, rows: &[RawRow]) -> PathBuf {
    let path = dir.join(name);
    let mut writer = csv::Writer::from_path(&path).expect("create raw csv");
    writer.write_record(RAW_HEADERS).expect("write header");
    for row in rows {
        writer.write_record(row.cells()).expect("write row");
    }
    writer.flush().expect("flush raw csv");
    path
}

#[must_use]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A cleaned, approved application
#[must_use]
pub fn application(patient_id: &str, state: &str, amount: f64) -> ApplicationRecord {
    ApplicationRecord {
        patient_id: Some(patient_id.to_string()),
        grant_req_date: Some(date(2021, 1, 1)),
        app_year: Some(2021),
        pt_city: Some("Omaha".to_string()),
        pt_state: Some(state.to_string()),
        gender: Gender::Female,
        insurance_type: InsuranceType::Medicaid,
        assistance_type: Some("Rent".to_string()),
        request_status: Some("approved".to_string()),
        application_signed: Some("no".to_string()),
        payment_submitted: Some("yes".to_string()),
        amount: Some(amount),
        remaining_balance: Some(0.0),
        ready_for_review: true,
        days_to_support: Some(7),
        support_sent_date: Some(date(2021, 1, 8)),
        passthrough: Vec::new(),
    }
}

#[must_use]
pub fn table(records: Vec<ApplicationRecord>) -> CleanedTable {
    CleanedTable::from_records(records)
}
