//! Data model for registry record sanitization.
//!
//! - **table**: column-ordered [`Table`] of tagged [`CellValue`]s
//! - **schema**: the declared column groups the cleaning pipeline relies on
//! - **options**: processing options shared by the library and the CLI
//! - **report**: audit types produced by a cleaning run

pub mod error;
pub mod options;
pub mod report;
pub mod schema;
pub mod table;

pub use error::{ModelError, Result};
pub use options::{BooleanPolicy, CleaningOptions};
pub use report::{CleaningReport, ColumnChange, MissingCount, MissingValueReport, StepReport};
pub use schema::{
    BOOLEAN_COLUMNS, CATEGORICAL_COLUMNS, ColumnGroup, DATE_COLUMNS, FREE_TEXT_COLUMNS,
    NUMERIC_COLUMNS, required_columns,
};
pub use table::{CellValue, Column, Table, ValueKey, format_numeric};
