//! Cleaned table output.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use ficha_model::Table;

use crate::error::{ReportError, Result};

/// Writes `table` as comma-delimited text with a header row.
///
/// The file is written next to `path` under a temporary name and renamed
/// into place, so a failed write leaves no partial output.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = temp_path_for(path);
    let file = File::create(&temp_path).map_err(|source| ReportError::Io {
        operation: "create",
        path: temp_path.clone(),
        source,
    })?;

    if let Err(error) = write_table_to(table, file, &temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }

    fs::rename(&temp_path, path).map_err(|source| ReportError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "wrote cleaned table"
    );
    Ok(())
}

/// Serializes `table` into any writer. `path` only labels errors.
pub fn write_table_to<W: Write>(table: &Table, writer: W, path: &Path) -> Result<()> {
    let csv_error = |source: csv::Error| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_writer(writer);
    writer
        .write_record(table.column_names())
        .map_err(csv_error)?;
    for row in table.rows() {
        writer
            .write_record(row.iter().map(|cell| cell.render()))
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        operation: "flush",
        path: path.to_path_buf(),
        source,
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
