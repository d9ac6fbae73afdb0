//! Label folding for near-duplicate categories.

use ficha_model::CellValue;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Folds a label to its canonical comparison form.
///
/// Applies compatibility decomposition, drops combining marks, lowercases,
/// collapses whitespace runs to one space and trims. Folding a folded label
/// returns it unchanged.
///
/// ```
/// use ficha_transform::fold_label;
///
/// assert_eq!(fold_label("São   Paulo"), "sao paulo");
/// assert_eq!(fold_label(" SAO PAULO "), "sao paulo");
/// ```
pub fn fold_label(raw: &str) -> String {
    let stripped: String = raw.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    // Lowercasing can reintroduce marks (e.g. dotted capital I).
    let lowered: String = stripped
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replaces a text cell with its folded label.
///
/// Blank text becomes null; other cell types are returned unchanged.
pub fn collapse_label(value: &CellValue) -> CellValue {
    match value {
        CellValue::Text(raw) => {
            let folded = fold_label(raw);
            if folded.is_empty() {
                CellValue::Null
            } else {
                CellValue::Text(folded)
            }
        }
        CellValue::Null | CellValue::Bool(_) | CellValue::Number(_) | CellValue::Timestamp(_) => {
            value.clone()
        }
    }
}
