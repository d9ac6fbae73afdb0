//! Cleaning report serialization.

use std::fs;
use std::path::Path;

use ficha_model::CleaningReport;

use crate::error::{ReportError, Result};

pub fn report_to_json(report: &CleaningReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes the report as pretty-printed JSON.
pub fn write_report_json(report: &CleaningReport, path: &Path) -> Result<()> {
    let json = report_to_json(report)?;
    fs::write(path, json).map_err(|source| ReportError::Io {
        operation: "write",
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote cleaning report");
    Ok(())
}
