//! Blood-pressure unit correction.
//!
//! Readings such as `12,0` are `120` recorded in centimeters of mercury. The
//! correction looks only at the text shape: a comma with exactly two ASCII
//! digits before it. `99,0` therefore becomes `990`.

use ficha_model::CellValue;

use crate::normalization::{normalize_numeric, parse_decimal};

/// Corrects one pressure cell and coerces it to a number.
///
/// Matching text is multiplied by ten; anything else goes through
/// [`normalize_numeric`].
pub fn correct_pressure(value: &CellValue) -> CellValue {
    if let CellValue::Text(raw) = value
        && let Some(scaled) = scale_short_reading(raw.trim())
    {
        return CellValue::Number(scaled);
    }
    normalize_numeric(value)
}

fn scale_short_reading(raw: &str) -> Option<f64> {
    let (integer, fraction) = raw.split_once(',')?;
    if integer.len() != 2 || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Shift the decimal point textually so 12,34 becomes 123.4 exactly.
    let mut digits = fraction.chars();
    let shifted = match digits.next() {
        None => format!("{integer}0"),
        Some(first) if digits.as_str().is_empty() => format!("{integer}{first}"),
        Some(first) => format!("{integer}{first}.{}", digits.as_str()),
    };
    parse_decimal(&shifted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_two_digit_comma_readings() {
        assert_eq!(correct_pressure(&CellValue::text("12,0")), CellValue::Number(120.0));
        assert_eq!(correct_pressure(&CellValue::text("13,5")), CellValue::Number(135.0));
        assert_eq!(correct_pressure(&CellValue::text("12,34")), CellValue::Number(123.4));
        assert_eq!(correct_pressure(&CellValue::text("99,0")), CellValue::Number(990.0));
    }

    #[test]
    fn other_shapes_parse_as_given() {
        assert_eq!(correct_pressure(&CellValue::text("120")), CellValue::Number(120.0));
        assert_eq!(correct_pressure(&CellValue::text("12.5")), CellValue::Number(12.5));
        assert_eq!(correct_pressure(&CellValue::text("8,5")), CellValue::Number(8.5));
        assert_eq!(correct_pressure(&CellValue::text("120,5")), CellValue::Number(120.5));
        assert_eq!(correct_pressure(&CellValue::Number(80.0)), CellValue::Number(80.0));
    }

    #[test]
    fn malformed_readings_are_null() {
        assert_eq!(correct_pressure(&CellValue::text("12/8")), CellValue::Null);
        assert_eq!(correct_pressure(&CellValue::text("1a,0")), CellValue::Null);
        assert_eq!(correct_pressure(&CellValue::Null), CellValue::Null);
    }
}
