//! Cleaning pipeline
//!
//! Turns a `RawTable` into a `CleanedTable` in a fixed order of steps:
//!
//! 1. normalize column names and check the required columns;
//! 2. parse `Grant_Req_Date` (failures become missing);
//! 3. replace every `"Missing"` cell with a missing value;
//! 4. trim and lower-case the three status columns;
//! 5. coerce `Amount` and `Remaining_Balance` to numbers;
//! 6. derive `Ready_for_Review`;
//! 7. draw the simulated `Days_To_Support` and derive `Support_Sent_Date`;
//! 8. canonicalize `Gender`;
//! 9. upper-case `Pt_State` and drop rows equal to `"NAN"`;
//! 10. canonicalize `Insurance_Type`.
//!
//! Source columns outside the cleaned set ride along as trimmed text.
//!
//! `CleaningPipeline::run` adds reading the source file and persisting the
//! artifact. A schema error aborts before anything is written.

pub mod delay;
pub mod report;

pub use delay::DelaySampler;
pub use report::CleaningReport;

use std::path::Path;

use chrono::{Datelike, Days, NaiveDate};

use crate::config::PipelineConfig;
use crate::error::{AssistError, Result};
use crate::models::{
    ApplicationRecord, Canonical, CleanedTable, Gender, InsuranceType, RawTable, ready_for_review,
};
use crate::reader::read_raw_table;
use crate::schema::adapt::{
    coerce_number, coerce_year, is_sentinel, normalize_status, normalize_text, parse_date_string,
};
use crate::schema::{self, check_columns};
use crate::utils::io::write_cleaned;
use crate::utils::logging::{create_spinner, finish_and_clear, log_warning};

/// Column positions resolved once per run
struct ColumnIndex {
    grant_req_date: usize,
    request_status: usize,
    application_signed: usize,
    payment_submitted: usize,
    gender: usize,
    insurance_type: usize,
    pt_state: usize,
    pt_city: usize,
    assistance_type: usize,
    amount: usize,
    remaining_balance: usize,
    patient_id: Option<usize>,
    app_year: Option<usize>,
    passthrough: Vec<usize>,
}

impl ColumnIndex {
    fn resolve(raw: &RawTable, passthrough: &[String]) -> Result<Self> {
        let required = |name: &str| {
            raw.column_index(name)
                .ok_or_else(|| AssistError::MissingColumns {
                    columns: vec![name.to_string()],
                })
        };

        Ok(Self {
            grant_req_date: required(schema::GRANT_REQ_DATE)?,
            request_status: required(schema::REQUEST_STATUS)?,
            application_signed: required(schema::APPLICATION_SIGNED)?,
            payment_submitted: required(schema::PAYMENT_SUBMITTED)?,
            gender: required(schema::GENDER)?,
            insurance_type: required(schema::INSURANCE_TYPE)?,
            pt_state: required(schema::PT_STATE)?,
            pt_city: required(schema::PT_CITY)?,
            assistance_type: required(schema::ASSISTANCE_TYPE)?,
            amount: required(schema::AMOUNT)?,
            remaining_balance: required(schema::REMAINING_BALANCE)?,
            patient_id: raw.column_index(schema::PATIENT_ID),
            app_year: raw.column_index(schema::APP_YEAR),
            passthrough: passthrough
                .iter()
                .map(|name| required(name.as_str()))
                .collect::<Result<_>>()?,
        })
    }
}

/// Batch cleaning of raw application spreadsheets
#[derive(Debug, Clone, Default)]
pub struct CleaningPipeline {
    config: PipelineConfig,
}

impl CleaningPipeline {
    /// Create a pipeline after validating the configuration
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Read `input`, clean it and persist the artifact at `output`
    pub fn run(&self, input: &Path, output: &Path) -> Result<CleaningReport> {
        let spinner = self
            .config
            .show_progress
            .then(|| create_spinner(Some("Cleaning applications")));

        let result = read_raw_table(input)
            .and_then(|raw| self.clean(raw))
            .and_then(|(table, report)| {
                write_cleaned(output, &table)?;
                Ok(report)
            });

        if let Some(pb) = &spinner {
            finish_and_clear(pb);
        }

        let report = result?;
        report.log_summary();
        Ok(report)
    }

    /// Clean a raw table with a generator seeded from the configuration
    pub fn clean(&self, raw: RawTable) -> Result<(CleanedTable, CleaningReport)> {
        let mut sampler = DelaySampler::new(&self.config.delay);
        self.clean_with(raw, &mut sampler)
    }

    /// Clean a raw table drawing delays from `sampler`
    ///
    /// The sampler is advanced exactly once per raw row, in row order.
    pub fn clean_with(
        &self,
        mut raw: RawTable,
        sampler: &mut DelaySampler,
    ) -> Result<(CleanedTable, CleaningReport)> {
        // Step 1: headers and schema
        raw.normalize_headers();
        let compat = check_columns(raw.headers());
        if !compat.compatible() {
            return Err(AssistError::MissingColumns {
                columns: compat.missing_required,
            });
        }
        for column in &compat.missing_optional {
            log_warning(&format!("Optional column {column} is absent"), None);
        }
        let cols = ColumnIndex::resolve(&raw, &compat.passthrough)?;

        let mut report = CleaningReport {
            rows_read: raw.num_rows(),
            ignored_columns: compat.ignored,
            passthrough_columns: compat.passthrough.clone(),
            missing_optional_columns: compat.missing_optional,
            ..CleaningReport::default()
        };

        // Step 2: dates are parsed before sentinel replacement
        let dates: Vec<Option<NaiveDate>> = (0..raw.num_rows())
            .map(|row| {
                let cell = raw.cell(row, cols.grant_req_date)?;
                let parsed = parse_date_string(cell, &self.config.date_formats);
                if parsed.is_none() && !is_sentinel(cell, &self.config.missing_sentinel) {
                    report.unparseable_dates += 1;
                }
                parsed
            })
            .collect();

        // Step 3
        report.sentinel_cells_replaced = raw.replace_sentinel(&self.config.missing_sentinel);

        // Step 4
        for col in [cols.request_status, cols.payment_submitted, cols.application_signed] {
            raw.map_column(col, |v| {
                let status = normalize_status(v);
                (!status.is_empty()).then_some(status)
            });
        }

        // Step 5
        let amounts = coerce_column(&raw, cols.amount, &mut report.unparseable_amounts);
        let balances = coerce_column(
            &raw,
            cols.remaining_balance,
            &mut report.unparseable_balances,
        );

        // Steps 6-10, row by row so the delay draws follow input order
        let mut records = Vec::with_capacity(raw.num_rows());
        for (row, (grant_req_date, (amount, remaining_balance))) in dates
            .into_iter()
            .zip(amounts.into_iter().zip(balances))
            .enumerate()
        {
            let text = |col: usize| raw.cell(row, col);

            let request_status = text(cols.request_status).map(str::to_string);
            let application_signed = text(cols.application_signed).map(str::to_string);
            let ready = ready_for_review(request_status.as_deref(), application_signed.as_deref());

            let days = sampler.next_days();
            let support_sent_date =
                grant_req_date.and_then(|d| d.checked_add_days(Days::new(u64::from(days))));

            let gender_raw = text(cols.gender);
            let gender = Gender::canonicalize(gender_raw);
            if gender_raw.is_some_and(|g| Gender::lookup(g).is_none()) {
                report.unmapped_genders += 1;
            }

            let pt_state = text(cols.pt_state).map(|s| s.trim().to_uppercase());
            if pt_state.as_deref() == Some(self.config.dropped_state.as_str()) {
                report.rows_dropped_invalid_state += 1;
                continue;
            }

            let insurance_raw = text(cols.insurance_type);
            let insurance_type = InsuranceType::canonicalize(insurance_raw);
            if insurance_raw.is_some_and(|i| InsuranceType::lookup(i).is_none()) {
                report.unmapped_insurance_types += 1;
            }

            let app_year = cols
                .app_year
                .and_then(|col| text(col))
                .and_then(coerce_year)
                .or_else(|| grant_req_date.map(|d| d.year()));

            records.push(ApplicationRecord {
                patient_id: cols.patient_id.and_then(|col| text(col)).and_then(normalize_text),
                grant_req_date,
                app_year,
                pt_city: text(cols.pt_city).and_then(normalize_text),
                pt_state,
                gender,
                insurance_type,
                assistance_type: text(cols.assistance_type).and_then(normalize_text),
                request_status,
                application_signed,
                payment_submitted: text(cols.payment_submitted).map(str::to_string),
                amount,
                remaining_balance,
                ready_for_review: ready,
                days_to_support: Some(days),
                support_sent_date,
                passthrough: cols
                    .passthrough
                    .iter()
                    .map(|&col| text(col).and_then(normalize_text))
                    .collect(),
            });
        }

        report.rows_written = records.len();
        if report.rows_dropped_invalid_state > 0 {
            log::info!(
                "Dropped {} rows with state \"{}\"",
                report.rows_dropped_invalid_state,
                self.config.dropped_state
            );
        }

        Ok((
            CleanedTable::with_passthrough(records, compat.passthrough),
            report,
        ))
    }
}

/// Coerce a column to numbers, counting present cells that fail
fn coerce_column(raw: &RawTable, col: usize, failures: &mut usize) -> Vec<Option<f64>> {
    (0..raw.num_rows())
        .map(|row| {
            let cell = raw.cell(row, col)?;
            let value = coerce_number(cell);
            if value.is_none() {
                *failures += 1;
            }
            value
        })
        .collect()
}
