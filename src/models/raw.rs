//! Raw spreadsheet table
//!
//! Cells are kept as optional text exactly as read; an empty cell is `None`.

use crate::schema::adapt::is_sentinel;
use crate::schema::normalize_column_name;

/// Raw application table as read from the source spreadsheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Create a table; every row is padded or truncated to the header width
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Column headers in source order
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in source order
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of data rows
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Normalize every header in place
    pub fn normalize_headers(&mut self) {
        for header in &mut self.headers {
            *header = normalize_column_name(header);
        }
    }

    /// Index of the first column with the given name
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell text at `(row, col)`
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|c| c.as_deref())
    }

    /// Apply `f` to every present cell of a column
    pub fn map_column<F>(&mut self, col: usize, mut f: F)
    where
        F: FnMut(&str) -> Option<String>,
    {
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(col) {
                *cell = cell.as_deref().and_then(&mut f);
            }
        }
    }

    /// Replace every cell exactly equal to `sentinel` with a missing value
    ///
    /// Returns the number of replaced cells.
    pub fn replace_sentinel(&mut self, sentinel: &str) -> usize {
        let mut replaced = 0;
        for cell in self.rows.iter_mut().flatten() {
            if cell.as_deref().is_some_and(|v| is_sentinel(v, sentinel)) {
                *cell = None;
                replaced += 1;
            }
        }
        replaced
    }
}
