//! Cleaned application record and table
//!
//! An `ApplicationRecord` is one surviving row of the cleaning pipeline. The
//! serde names are the normalized column names of the artifact, and the field
//! order is the artifact column order.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::lenient;
use crate::models::types::{Gender, InsuranceType};
use crate::schema::{self, CLEANED_COLUMNS};

/// Status value of an approved request
pub const APPROVED: &str = "approved";

/// One cleaned financial-assistance application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Patient identifier
    #[serde(rename = "Patient_ID#", default)]
    pub patient_id: Option<String>,
    /// Date the grant was requested
    #[serde(rename = "Grant_Req_Date", default, deserialize_with = "lenient::date")]
    pub grant_req_date: Option<NaiveDate>,
    /// Application year
    #[serde(rename = "App_Year", default, deserialize_with = "lenient::year")]
    pub app_year: Option<i32>,
    /// Patient city
    #[serde(rename = "Pt_City", default)]
    pub pt_city: Option<String>,
    /// Upper-cased patient state
    #[serde(rename = "Pt_State", default)]
    pub pt_state: Option<String>,
    /// Canonical gender
    #[serde(rename = "Gender", default, deserialize_with = "lenient::canonical")]
    pub gender: Gender,
    /// Canonical insurance type
    #[serde(rename = "Insurance_Type", default, deserialize_with = "lenient::canonical")]
    pub insurance_type: InsuranceType,
    /// Assistance class
    #[serde(rename = "Type_of_Assistance_CLASS", default)]
    pub assistance_type: Option<String>,
    /// Lower-cased request status
    #[serde(rename = "Request_Status", default)]
    pub request_status: Option<String>,
    /// Lower-cased signature status
    #[serde(rename = "Application_Signed?", default)]
    pub application_signed: Option<String>,
    /// Lower-cased payment status
    #[serde(rename = "Payment_Submitted?", default)]
    pub payment_submitted: Option<String>,
    /// Granted amount
    #[serde(rename = "Amount", default, deserialize_with = "lenient::number")]
    pub amount: Option<f64>,
    /// Remaining grant balance
    #[serde(rename = "Remaining_Balance", default, deserialize_with = "lenient::number")]
    pub remaining_balance: Option<f64>,
    /// Approved but not yet signed
    #[serde(rename = "Ready_for_Review", default, deserialize_with = "lenient::flag")]
    pub ready_for_review: bool,
    /// Simulated days between request and support; absent in older artifacts
    #[serde(rename = "Days_To_Support", default, deserialize_with = "lenient::days")]
    pub days_to_support: Option<u32>,
    /// `Grant_Req_Date` plus `Days_To_Support`
    #[serde(rename = "Support_Sent_Date", default, deserialize_with = "lenient::date")]
    pub support_sent_date: Option<NaiveDate>,
    /// Values of the table's passthrough columns, in `CleanedTable` order
    #[serde(skip)]
    pub passthrough: Vec<Option<String>>,
}

/// Review flag: approved and not signed
///
/// A missing signature status counts as "not yes".
#[must_use]
pub fn ready_for_review(request_status: Option<&str>, application_signed: Option<&str>) -> bool {
    request_status == Some(APPROVED) && application_signed != Some("yes")
}

impl ApplicationRecord {
    /// Whether the request was approved
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.request_status.as_deref() == Some(APPROVED)
    }

    /// Get the Arrow schema of the cleaned artifact
    #[must_use]
    pub fn schema() -> Schema {
        Schema::new(vec![
            Field::new(schema::PATIENT_ID, DataType::Utf8, true),
            Field::new(schema::GRANT_REQ_DATE, DataType::Date32, true),
            Field::new(schema::APP_YEAR, DataType::Int32, true),
            Field::new(schema::PT_CITY, DataType::Utf8, true),
            Field::new(schema::PT_STATE, DataType::Utf8, true),
            Field::new(schema::GENDER, DataType::Utf8, false),
            Field::new(schema::INSURANCE_TYPE, DataType::Utf8, false),
            Field::new(schema::ASSISTANCE_TYPE, DataType::Utf8, true),
            Field::new(schema::REQUEST_STATUS, DataType::Utf8, true),
            Field::new(schema::APPLICATION_SIGNED, DataType::Utf8, true),
            Field::new(schema::PAYMENT_SUBMITTED, DataType::Utf8, true),
            Field::new(schema::AMOUNT, DataType::Float64, true),
            Field::new(schema::REMAINING_BALANCE, DataType::Float64, true),
            Field::new(schema::READY_FOR_REVIEW, DataType::Boolean, false),
            Field::new(schema::DAYS_TO_SUPPORT, DataType::UInt32, true),
            Field::new(schema::SUPPORT_SENT_DATE, DataType::Date32, true),
        ])
    }

    /// Convert a `RecordBatch` to cleaned records
    pub fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }

    /// Convert cleaned records to a `RecordBatch`
    pub fn to_record_batch(records: &[Self]) -> Result<RecordBatch> {
        // Use the predefined schema to ensure consistent date handling
        let fields: Vec<FieldRef> = Self::schema()
            .fields()
            .iter()
            .map(Arc::clone)
            .collect();

        Ok(serde_arrow::to_record_batch(&fields, &records)?)
    }
}

/// Immutable cleaned table shared by the dashboard views
///
/// Besides the fixed artifact columns a table may carry passthrough columns:
/// raw columns outside the known set, kept as text after the fixed columns.
/// Each record's `passthrough` values line up with `passthrough_columns`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedTable {
    records: Vec<ApplicationRecord>,
    columns: Vec<String>,
    passthrough: Vec<String>,
}

impl CleanedTable {
    /// Table produced in memory; every artifact column is present
    #[must_use]
    pub fn from_records(records: Vec<ApplicationRecord>) -> Self {
        Self::with_passthrough(records, Vec::new())
    }

    /// Table produced in memory with extra `passthrough` columns
    #[must_use]
    pub fn with_passthrough(records: Vec<ApplicationRecord>, passthrough: Vec<String>) -> Self {
        let columns = CLEANED_COLUMNS
            .iter()
            .map(ToString::to_string)
            .chain(passthrough.iter().cloned())
            .collect();
        Self {
            records,
            columns,
            passthrough,
        }
    }

    /// Table loaded from an artifact that carried only `columns`
    ///
    /// Columns outside the fixed artifact set are the passthrough columns.
    #[must_use]
    pub fn with_columns(records: Vec<ApplicationRecord>, columns: Vec<String>) -> Self {
        let passthrough = columns
            .iter()
            .filter(|c| !CLEANED_COLUMNS.contains(&c.as_str()))
            .cloned()
            .collect();
        Self {
            records,
            columns,
            passthrough,
        }
    }

    /// Records in artifact order
    #[must_use]
    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    /// Column names present in the source artifact
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Whether the source artifact carried `name`
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Passthrough column names in artifact order
    #[must_use]
    pub fn passthrough_columns(&self) -> &[String] {
        &self.passthrough
    }

    /// Value of passthrough column `name` for `record`
    #[must_use]
    pub fn passthrough_value<'a>(
        &self,
        record: &'a ApplicationRecord,
        name: &str,
    ) -> Option<&'a str> {
        let index = self.passthrough.iter().position(|c| c == name)?;
        record.passthrough.get(index)?.as_deref()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with `Request_Status == "approved"`
    pub fn approved(&self) -> impl Iterator<Item = &ApplicationRecord> {
        self.records.iter().filter(|r| r.is_approved())
    }
}
