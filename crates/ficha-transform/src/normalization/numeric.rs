//! Numeric normalization utilities.

use ficha_model::CellValue;

/// Parses a decimal number, accepting a single comma as the decimal separator.
///
/// Returns `None` for blank, malformed or non-finite input.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replacen(',', ".", 1).parse::<f64>()
    } else {
        trimmed.parse::<f64>()
    };
    parsed.ok().filter(|value| value.is_finite())
}

/// Coerces a cell to a finite number, nulling anything that is not one.
pub fn normalize_numeric(value: &CellValue) -> CellValue {
    let number = match value {
        CellValue::Number(v) => Some(*v).filter(|v| v.is_finite()),
        CellValue::Text(raw) => parse_decimal(raw),
        CellValue::Null | CellValue::Bool(_) | CellValue::Timestamp(_) => None,
    };
    number.map_or(CellValue::Null, CellValue::Number)
}
