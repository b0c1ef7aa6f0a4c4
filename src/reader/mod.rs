//! Raw spreadsheet reading
//!
//! Workbooks (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) are read from their
//! first worksheet with calamine; `.csv` files with the csv crate. Both yield
//! a `RawTable` whose first row is the header.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use calamine::{Data, DataType, Reader, open_workbook_auto};

use crate::error::util::safe_open_file;
use crate::error::{AssistError, Result};
use crate::models::RawTable;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Supported raw input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Spreadsheet workbook
    Workbook,
    /// Comma separated values
    Csv,
}

impl InputFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Ok(Self::Workbook),
            Some("csv") => Ok(Self::Csv),
            _ => Err(AssistError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Read the raw application table from `path`
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let start = Instant::now();
    log_operation_start("Reading raw applications from", path);

    let table = match InputFormat::from_path(path)? {
        InputFormat::Workbook => read_workbook(path)?,
        InputFormat::Csv => read_csv(safe_open_file(path, "raw applications")?)?,
    };

    log_operation_complete("read", path, table.num_rows(), Some(start.elapsed()));
    Ok(table)
}

/// Read raw rows from any CSV source
pub fn read_csv<R: Read>(source: R) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);

    let headers: Vec<String> = reader.headers()?.iter().map(ToString::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| (!field.is_empty()).then(|| field.to_string()))
                .collect(),
        );
    }

    Ok(RawTable::new(headers, rows))
}

fn read_workbook(path: &Path) -> Result<RawTable> {
    // Surface the friendlier not-found message before calamine's own
    safe_open_file(path, "raw applications")?;

    let mut workbook = open_workbook_auto(path).map_err(|e| AssistError::spreadsheet(path, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AssistError::EmptyWorkbook(path.to_path_buf()))?
        .map_err(|e| AssistError::spreadsheet(path, e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| AssistError::EmptyWorkbook(path.to_path_buf()))?
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default())
        .collect();

    let rows = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok(RawTable::new(headers, rows))
}

/// Render a workbook cell as the text the cleaning steps expect
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => (!s.is_empty()).then(|| s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(format_float(*f)),
        Data::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        Data::DateTime(_) | Data::DateTimeIso(_) => Some(
            cell.as_date()
                .map_or_else(|| cell.to_string(), |d| d.format("%Y-%m-%d").to_string()),
        ),
        other => Some(other.to_string()),
    }
}

/// Integral floats print without a fractional part so IDs and years stay clean
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
