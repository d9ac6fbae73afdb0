//! Delimited file loading.
//!
//! Every column is read by Polars as text, so leading zeros, compact dates and
//! pass-through columns arrive verbatim. Typing is left to the cleaning steps,
//! which coerce each declared column group on their own.

use std::fs;
use std::path::Path;

use ficha_model::{Column, Table};
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::IngestError;
use crate::polars_utils::any_to_cell;

/// Cell contents read as null, in addition to blank cells.
pub const NULL_TOKENS: [&str; 10] = [
    "", "NA", "N/A", "n/a", "NULL", "null", "NaN", "nan", "<NA>", "#N/A",
];

/// Trims a header, drops a byte-order mark and collapses inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Reads a comma-delimited file with a header row into a [`Table`].
pub fn read_csv_table(path: &Path) -> Result<Table, IngestError> {
    let metadata = fs::metadata(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() == 0 {
        return Err(IngestError::Empty {
            path: path.to_path_buf(),
        });
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .finish()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let table = dataframe_to_table(&df)?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );
    Ok(table)
}

/// Converts a Polars frame into a [`Table`], keeping column order.
pub fn dataframe_to_table(df: &DataFrame) -> Result<Table, IngestError> {
    let height = df.height();
    let mut table = Table::with_rows(height);
    for column in df.get_columns() {
        let name = normalize_header(column.name().as_str());
        let mut values = Vec::with_capacity(height);
        for idx in 0..height {
            values.push(any_to_cell(column.get(idx)?));
        }
        table.push_column(Column::new(name, values))?;
    }
    Ok(table)
}
