//! Stages of a cleaning run: ingest, clean, output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ficha_ingest::read_csv_table;
use ficha_model::Table;
use ficha_report::{write_report_json, write_table};
use ficha_transform::{CleaningContext, CleaningOutcome, clean_table};
use tracing::{info, info_span};

/// Marker in the source file name replaced to name the cleaned file.
const SOURCE_MARKER: &str = "_desafio";
const CLEANED_MARKER: &str = "_tratado";

pub fn ingest(path: &Path) -> Result<Table> {
    let _guard = info_span!("ingest", path = %path.display()).entered();
    let table =
        read_csv_table(path).with_context(|| format!("read input {}", path.display()))?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "input loaded"
    );
    Ok(table)
}

pub fn clean(table: Table, ctx: &CleaningContext) -> Result<CleaningOutcome> {
    let _guard = info_span!("clean", now = %ctx.now).entered();
    clean_table(table, ctx).context("clean table")
}

/// Where the cleaned table and optional report go.
#[derive(Debug, Clone)]
pub struct OutputConfig<'a> {
    pub table_path: &'a Path,
    pub report_path: Option<&'a Path>,
}

pub fn output(outcome: &CleaningOutcome, config: &OutputConfig<'_>) -> Result<()> {
    let _guard = info_span!("write", path = %config.table_path.display()).entered();
    write_table(&outcome.table, config.table_path)
        .with_context(|| format!("write {}", config.table_path.display()))?;
    if let Some(path) = config.report_path {
        write_report_json(&outcome.report, path)
            .with_context(|| format!("write report {}", path.display()))?;
    }
    Ok(())
}

/// Default location of the cleaned file, next to the input.
///
/// `dados_ficha_a_desafio.csv` becomes `dados_ficha_a_tratado.csv`; a name
/// without the `_desafio` marker gets `_tratado` appended to its stem.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let cleaned = if stem.contains(SOURCE_MARKER) {
        stem.replace(SOURCE_MARKER, CLEANED_MARKER)
    } else {
        format!("{stem}{CLEANED_MARKER}")
    };
    input.with_file_name(format!("{cleaned}.csv"))
}
