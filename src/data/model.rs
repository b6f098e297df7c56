use std::fmt;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use serde::Serialize;

use crate::error::Result;

/// One output column: a value from every row of the block, in row order.
pub type Column = Vec<f64>;

// ---------------------------------------------------------------------------
// Block – a padded, transposed numeric table
// ---------------------------------------------------------------------------

/// The numeric table that followed one header, stored column-major.
///
/// Every column has `n_rows()` entries. Rows shorter than the longest one
/// were right-padded with NaN; `row_lengths` keeps their original lengths so
/// padding can be told apart from NaN values read from the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    columns: Vec<Column>,
    row_lengths: Vec<usize>,
}

impl Block {
    /// Pad ragged rows with NaN and transpose them into columns.
    ///
    /// Returns `None` when there are no rows.
    pub fn from_rows(mut rows: Vec<Vec<f64>>) -> Option<Self> {
        let row_lengths: Vec<usize> = rows.iter().map(Vec::len).collect();
        let max_length = row_lengths.iter().copied().max()?;
        if max_length == 0 {
            return None;
        }

        for row in &mut rows {
            row.resize(max_length, f64::NAN);
        }

        let columns: Vec<Column> = (0..max_length)
            .map(|j| rows.iter().map(|row| row[j]).collect())
            .collect();

        Some(Block {
            columns,
            row_lengths,
        })
    }

    /// All columns, left to right.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column `j`, if it exists.
    pub fn column(&self, j: usize) -> Option<&[f64]> {
        self.columns.get(j).map(Vec::as_slice)
    }

    /// Number of columns (the longest original row).
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, i.e. the length of every column.
    pub fn n_rows(&self) -> usize {
        self.row_lengths.len()
    }

    /// Token count of each row before padding.
    pub fn row_lengths(&self) -> &[usize] {
        &self.row_lengths
    }

    /// Whether cell (`col`, `row`) was filled in by padding.
    pub fn is_padding(&self, col: usize, row: usize) -> bool {
        self.row_lengths
            .get(row)
            .is_some_and(|&len| col >= len && col < self.n_columns())
    }

    /// Row `r` after padding.
    pub fn row(&self, r: usize) -> Option<Vec<f64>> {
        if r >= self.n_rows() {
            return None;
        }
        Some(self.columns.iter().map(|col| col[r]).collect())
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    /// Human-readable shape summary.
    pub fn status(&self) -> String {
        status_message(Some(self))
    }

    /// Arrow view of the block: one nullable `Float64` field per column,
    /// named `col_0`, `col_1`, ... Padded cells become nulls.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let fields: Vec<Field> = (0..self.n_columns())
            .map(|j| Field::new(format!("col_{j}"), DataType::Float64, true))
            .collect();
        let schema = Arc::new(Schema::new(fields));

        let arrays: Vec<ArrayRef> = self
            .columns
            .iter()
            .enumerate()
            .map(|(j, col)| {
                let values: Float64Array = col
                    .iter()
                    .enumerate()
                    .map(|(r, &v)| if self.is_padding(j, r) { None } else { Some(v) })
                    .collect();
                Arc::new(values) as ArrayRef
            })
            .collect();

        Ok(RecordBatch::try_new(schema, arrays)?)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.n_rows() {
            let cells: Vec<String> = self.columns.iter().map(|col| col[r].to_string()).collect();
            writeln!(f, "{}", cells.join("\t"))?;
        }
        Ok(())
    }
}

/// Status line for an extraction outcome.
pub fn status_message(block: Option<&Block>) -> String {
    match block {
        Some(b) => format!(
            "{} columns were loaded, each with {} rows.",
            b.n_columns(),
            b.n_rows()
        ),
        None => "The block was not found or is empty.".to_string(),
    }
}
