//! Parquet artifact encoding
//!
//! Passthrough columns are stored as nullable `Utf8` columns after the fixed
//! columns.

use std::fs::File;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, AsArray, StringArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::Result;
use crate::models::{ApplicationRecord, CleanedTable};
use crate::schema::CLEANED_COLUMNS;

/// Write a table as a single-batch Parquet file
pub fn write_records(file: File, table: &CleanedTable) -> Result<()> {
    let batch = to_record_batch(table)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

/// Fixed columns followed by one text column per passthrough column
fn to_record_batch(table: &CleanedTable) -> Result<RecordBatch> {
    let fixed = ApplicationRecord::to_record_batch(table.records())?;
    if table.passthrough_columns().is_empty() {
        return Ok(fixed);
    }

    let mut fields: Vec<Field> = fixed
        .schema()
        .fields()
        .iter()
        .map(|f| f.as_ref().clone())
        .collect();
    let mut arrays: Vec<ArrayRef> = fixed.columns().to_vec();

    for (i, name) in table.passthrough_columns().iter().enumerate() {
        fields.push(Field::new(name, DataType::Utf8, true));
        let values: StringArray = table
            .records()
            .iter()
            .map(|r| r.passthrough.get(i).and_then(|v| v.as_deref()))
            .collect();
        arrays.push(Arc::new(values));
    }

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?)
}

/// Read every batch of a Parquet artifact
pub fn read_records(file: File) -> Result<CleanedTable> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let columns: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let (fixed, extra): (Vec<usize>, Vec<usize>) =
        (0..columns.len()).partition(|&i| CLEANED_COLUMNS.contains(&columns[i].as_str()));

    let mut records = Vec::new();
    for batch in builder.build()? {
        let batch = batch?;
        let mut loaded = ApplicationRecord::from_record_batch(&batch.project(&fixed)?)?;

        let texts = extra
            .iter()
            .map(|&i| cast(batch.column(i), &DataType::Utf8))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        for (row, record) in loaded.iter_mut().enumerate() {
            record.passthrough = texts
                .iter()
                .map(|array| {
                    let values = array.as_string::<i32>();
                    values
                        .is_valid(row)
                        .then(|| values.value(row).to_string())
                })
                .collect();
        }
        records.extend(loaded);
    }

    Ok(CleanedTable::with_columns(records, columns))
}
