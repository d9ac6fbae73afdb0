//! Output collaborators: cleaned table as CSV, cleaning report as JSON.

pub mod csv_writer;
pub mod error;
pub mod json;

pub use csv_writer::{write_table, write_table_to};
pub use error::{ReportError, Result};
pub use json::{report_to_json, write_report_json};
