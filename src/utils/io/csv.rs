//! CSV artifact encoding
//!
//! The header row is always written from the fixed column order followed by
//! the table's passthrough columns, so an empty table still produces a
//! well-formed artifact.

use std::io::{Read, Write};

use crate::error::Result;
use crate::models::{ApplicationRecord, CleanedTable};
use crate::schema::CLEANED_COLUMNS;

/// Write a table with the canonical header row
pub fn write_records<W: Write>(sink: W, table: &CleanedTable) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);

    let passthrough = table.passthrough_columns();
    writer.write_record(
        CLEANED_COLUMNS
            .iter()
            .copied()
            .chain(passthrough.iter().map(String::as_str)),
    )?;

    for record in table.records() {
        let extra: Vec<Option<&str>> = (0..passthrough.len())
            .map(|i| record.passthrough.get(i).and_then(|v| v.as_deref()))
            .collect();
        writer.serialize((record, extra))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read records and remember which columns the artifact carried
///
/// Fixed columns are matched by name; every other column becomes a
/// passthrough column.
pub fn read_records<R: Read>(source: R) -> Result<CleanedTable> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers()?.clone();
    let columns: Vec<String> = headers.iter().map(ToString::to_string).collect();
    let extra: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| !CLEANED_COLUMNS.contains(&c.as_str()))
        .map(|(i, _)| i)
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record: ApplicationRecord = row.deserialize(Some(&headers))?;
        record.passthrough = extra
            .iter()
            .map(|&i| row.get(i).filter(|v| !v.is_empty()).map(ToString::to_string))
            .collect();
        records.push(record);
    }

    Ok(CleanedTable::with_columns(records, columns))
}
