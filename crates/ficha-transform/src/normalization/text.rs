//! Categorical text normalization.

use ficha_model::CellValue;

/// Trims and lowercases a categorical cell.
///
/// Non-text values are rendered first so the column ends up text-only.
/// Blank text becomes null.
pub fn normalize_categorical(value: &CellValue) -> CellValue {
    let rendered = match value {
        CellValue::Null => return CellValue::Null,
        CellValue::Text(raw) => raw.trim().to_lowercase(),
        CellValue::Bool(_) | CellValue::Number(_) | CellValue::Timestamp(_) => {
            value.render().to_lowercase()
        }
    };
    if rendered.is_empty() {
        CellValue::Null
    } else {
        CellValue::Text(rendered)
    }
}
