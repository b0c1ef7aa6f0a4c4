//! IO utilities for the cleaned artifact
//!
//! The artifact is written as CSV unless the output path ends in `.parquet`.
//! Writes go through a staging file so a failed run never leaves a partial
//! artifact behind.

pub mod csv;
pub mod parquet;

use std::hash::Hasher;
use std::path::Path;
use std::time::Instant;

use rustc_hash::FxHasher;

use crate::error::Result;
use crate::error::util::{safe_open_file, write_atomically};
use crate::models::CleanedTable;
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// On-disk format of the cleaned artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// Delimited text with a header row
    Csv,
    /// Columnar Parquet file
    Parquet,
}

impl ArtifactFormat {
    /// Pick the format from the file extension; anything but `.parquet` is CSV
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("parquet") => Self::Parquet,
            _ => Self::Csv,
        }
    }
}

/// Persist the cleaned table at `path`
pub fn write_cleaned(path: &Path, table: &CleanedTable) -> Result<()> {
    let start = Instant::now();
    log_operation_start("Writing cleaned applications to", path);

    match ArtifactFormat::from_path(path) {
        ArtifactFormat::Csv => {
            write_atomically(path, |file| csv::write_records(file, table))?;
        }
        ArtifactFormat::Parquet => {
            write_atomically(path, |file| parquet::write_records(file, table))?;
        }
    }

    log_operation_complete("wrote", path, table.len(), Some(start.elapsed()));
    Ok(())
}

/// Load a cleaned table from `path`
pub fn read_cleaned(path: &Path) -> Result<CleanedTable> {
    let start = Instant::now();
    log_operation_start("Loading cleaned applications from", path);

    let file = safe_open_file(path, "cleaned applications")?;
    let table = match ArtifactFormat::from_path(path) {
        ArtifactFormat::Csv => csv::read_records(file)?,
        ArtifactFormat::Parquet => parquet::read_records(file)?,
    };

    log_operation_complete("loaded", path, table.len(), Some(start.elapsed()));
    Ok(table)
}

/// Content fingerprint of a table: FxHash of its canonical CSV serialization
pub fn fingerprint(table: &CleanedTable) -> Result<u64> {
    let mut bytes = Vec::new();
    csv::write_records(&mut bytes, table)?;

    let mut hasher = FxHasher::default();
    hasher.write(&bytes);
    Ok(hasher.finish())
}
