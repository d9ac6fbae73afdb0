//! Boolean flag normalization.

use ficha_model::CellValue;

/// Maps a flag cell to `Bool`, keeping nulls.
///
/// Accepts `0`, `1`, `false` and `true` in any case and with surrounding
/// whitespace, plus `Number` cells equal to zero or one. Other spellings of
/// those numbers in text (`"1.0"`, `"+1"`, `"1e0"`) are not flags. Returns
/// `None` for any other literal; the caller decides whether that is an error
/// or a null.
pub fn normalize_boolean(value: &CellValue) -> Option<CellValue> {
    match value {
        CellValue::Null => Some(CellValue::Null),
        CellValue::Bool(flag) => Some(CellValue::Bool(*flag)),
        CellValue::Number(number) => number_flag(*number).map(CellValue::Bool),
        CellValue::Text(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Some(CellValue::Null);
            }
            match trimmed.to_lowercase().as_str() {
                "0" | "false" => Some(CellValue::Bool(false)),
                "1" | "true" => Some(CellValue::Bool(true)),
                _ => None,
            }
        }
        CellValue::Timestamp(_) => None,
    }
}

fn number_flag(number: f64) -> Option<bool> {
    if number == 0.0 {
        Some(false)
    } else if number == 1.0 {
        Some(true)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_literals() {
        assert_eq!(
            normalize_boolean(&CellValue::text("1")),
            Some(CellValue::Bool(true))
        );
        assert_eq!(
            normalize_boolean(&CellValue::text(" FALSE ")),
            Some(CellValue::Bool(false))
        );
        assert_eq!(
            normalize_boolean(&CellValue::text("True")),
            Some(CellValue::Bool(true))
        );
        assert_eq!(
            normalize_boolean(&CellValue::Number(0.0)),
            Some(CellValue::Bool(false))
        );
    }

    #[test]
    fn unknown_literals_are_not_coerced() {
        assert_eq!(normalize_boolean(&CellValue::text("2")), None);
        assert_eq!(normalize_boolean(&CellValue::text("sim")), None);
        assert_eq!(normalize_boolean(&CellValue::Number(2.0)), None);
    }

    #[test]
    fn numeric_spellings_in_text_are_not_flags() {
        for literal in ["1.0", "+1", "1e0", "1,0", "-0", "0.0"] {
            assert_eq!(normalize_boolean(&CellValue::text(literal)), None, "{literal}");
        }
    }

    #[test]
    fn nulls_and_blanks_stay_null() {
        assert_eq!(normalize_boolean(&CellValue::Null), Some(CellValue::Null));
        assert_eq!(
            normalize_boolean(&CellValue::text("   ")),
            Some(CellValue::Null)
        );
    }
}
