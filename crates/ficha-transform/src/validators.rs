//! Column-specific domain rules.
//!
//! Every validator compares folded labels (see [`fold_label`]), is total and
//! nulls what it rejects. Non-text cells are rejected.

use ficha_model::CellValue;

use crate::collapse::fold_label;

/// Canonical race/color labels: yellow, white, indigenous, black, mixed.
pub const RACE_LABELS: [&str; 5] = ["amarela", "branca", "indígena", "preta", "parda"];

/// Known placeholder and error codes found in the religion field.
pub const RELIGION_PLACEHOLDERS: [&str; 1] = ["10 eap 01"];

/// Religion entries mentioning the field's own name are form noise.
pub const RELIGION_MARKER: &str = "religião";

/// Accepted spellings of the "minimum wage(s)" unit.
pub const INCOME_UNIT_PHRASES: [&str; 3] =
    ["salário(s) mínimo(s)", "salário mínimo", "salários mínimos"];

/// Yes/no answers and sexual orientations entered in the gender identity field.
pub const GENDER_IDENTITY_REJECTS: [&str; 5] =
    ["não", "sim", "homossexual", "heterossexual", "bissexual"];

/// Keeps members of [`RACE_LABELS`], rewritten to the canonical label.
pub fn validate_race(value: &CellValue) -> CellValue {
    let Some(folded) = folded_text(value) else {
        return CellValue::Null;
    };
    RACE_LABELS
        .iter()
        .find(|label| fold_label(label) == folded)
        .map_or(CellValue::Null, |label| CellValue::text(*label))
}

pub fn validate_religion(value: &CellValue) -> CellValue {
    let Some(folded) = folded_text(value) else {
        return CellValue::Null;
    };
    let placeholder = RELIGION_PLACEHOLDERS
        .iter()
        .any(|code| fold_label(code) == folded);
    if placeholder || folded.contains(&fold_label(RELIGION_MARKER)) {
        CellValue::Null
    } else {
        value.clone()
    }
}

/// Keeps income brackets expressed in minimum wages, verbatim.
pub fn validate_income(value: &CellValue) -> CellValue {
    let Some(folded) = folded_text(value) else {
        return CellValue::Null;
    };
    let has_unit = INCOME_UNIT_PHRASES
        .iter()
        .any(|phrase| folded.contains(&fold_label(phrase)));
    if has_unit {
        value.clone()
    } else {
        CellValue::Null
    }
}

pub fn validate_gender_identity(value: &CellValue) -> CellValue {
    let Some(folded) = folded_text(value) else {
        return CellValue::Null;
    };
    if GENDER_IDENTITY_REJECTS
        .iter()
        .any(|reject| fold_label(reject) == folded)
    {
        CellValue::Null
    } else {
        value.clone()
    }
}

/// Folded text of a non-blank text cell.
fn folded_text(value: &CellValue) -> Option<String> {
    match value {
        CellValue::Text(raw) => Some(fold_label(raw)).filter(|folded| !folded.is_empty()),
        CellValue::Null | CellValue::Bool(_) | CellValue::Number(_) | CellValue::Timestamp(_) => {
            None
        }
    }
}
