//! Polars `AnyValue` conversion into table cells.

use ficha_model::CellValue;
use polars::prelude::AnyValue;

use crate::csv_table::NULL_TOKENS;

/// Converts a Polars `AnyValue` to a [`CellValue`].
///
/// Blank strings and the usual spreadsheet null tokens become
/// [`CellValue::Null`]; numbers become [`CellValue::Number`]. Text is kept
/// verbatim (no trimming) so downstream rules see the raw value.
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Null,
        AnyValue::Boolean(b) => CellValue::Bool(b),
        AnyValue::Int8(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int16(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int32(v) => CellValue::Number(f64::from(v)),
        AnyValue::Int64(v) => CellValue::Number(v as f64),
        AnyValue::UInt8(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt16(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt32(v) => CellValue::Number(f64::from(v)),
        AnyValue::UInt64(v) => CellValue::Number(v as f64),
        AnyValue::Float32(v) => number_cell(f64::from(v)),
        AnyValue::Float64(v) => number_cell(v),
        AnyValue::String(s) => text_cell(s),
        AnyValue::StringOwned(s) => text_cell(s.as_str()),
        other => text_cell(&other.to_string()),
    }
}

/// `NaN` is how the reader spells a missing float.
fn number_cell(value: f64) -> CellValue {
    if value.is_nan() {
        CellValue::Null
    } else {
        CellValue::Number(value)
    }
}

fn text_cell(raw: &str) -> CellValue {
    if NULL_TOKENS.contains(&raw.trim()) {
        CellValue::Null
    } else {
        CellValue::text(raw)
    }
}
