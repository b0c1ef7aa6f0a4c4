//! Counters collected during a cleaning run

use serde::Serialize;

/// Summary of what the cleaning pipeline changed or dropped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    /// Raw data rows read
    pub rows_read: usize,
    /// Cleaned rows kept
    pub rows_written: usize,
    /// Rows dropped because `Pt_State` was the literal "NAN"
    pub rows_dropped_invalid_state: usize,
    /// Cells equal to the missing sentinel
    pub sentinel_cells_replaced: usize,
    /// Present request dates that could not be parsed
    pub unparseable_dates: usize,
    /// Present amounts that could not be parsed
    pub unparseable_amounts: usize,
    /// Present balances that could not be parsed
    pub unparseable_balances: usize,
    /// Present gender values outside the synonym table
    pub unmapped_genders: usize,
    /// Present insurance values outside the synonym table
    pub unmapped_insurance_types: usize,
    /// Derived source columns that were recomputed instead of read
    pub ignored_columns: Vec<String>,
    /// Unknown source columns carried through as text
    pub passthrough_columns: Vec<String>,
    /// Optional source columns that were absent
    pub missing_optional_columns: Vec<String>,
}

impl CleaningReport {
    /// Log the counters at the end of a run
    pub fn log_summary(&self) {
        log::info!(
            "Cleaned {} of {} rows ({} dropped for state \"NAN\")",
            self.rows_written,
            self.rows_read,
            self.rows_dropped_invalid_state
        );
        log::info!(
            "Coercion failures: {} dates, {} amounts, {} balances; {} sentinel cells replaced",
            self.unparseable_dates,
            self.unparseable_amounts,
            self.unparseable_balances,
            self.sentinel_cells_replaced
        );
        if self.unmapped_genders > 0 || self.unmapped_insurance_types > 0 {
            log::info!(
                "Defaulted to Other: {} genders, {} insurance types",
                self.unmapped_genders,
                self.unmapped_insurance_types
            );
        }
        if !self.ignored_columns.is_empty() {
            log::debug!("Recomputed columns: {}", self.ignored_columns.join(", "));
        }
        if !self.passthrough_columns.is_empty() {
            log::info!("Passthrough columns: {}", self.passthrough_columns.join(", "));
        }
    }
}
