//! Plausibility ranges and the singleton filter.

use std::collections::HashMap;

use ficha_model::{CellValue, ValueKey};

use crate::normalization::normalize_numeric;

/// Inclusive numeric interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Height in meters.
pub const HEIGHT_RANGE: ValueRange = ValueRange::new(0.5, 2.5);
/// Weight in kilograms.
pub const WEIGHT_RANGE: ValueRange = ValueRange::new(2.0, 300.0);

/// Coerces a cell to a number and nulls it unless it lies within `range`.
pub fn filter_range(value: &CellValue, range: ValueRange) -> CellValue {
    match normalize_numeric(value) {
        CellValue::Number(number) if range.contains(number) => CellValue::Number(number),
        _ => CellValue::Null,
    }
}

/// Counts each distinct non-null value.
pub fn value_frequencies(values: &[CellValue]) -> HashMap<ValueKey, usize> {
    let mut counts = HashMap::new();
    for key in values.iter().filter_map(CellValue::key) {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Nulls every value that occurs exactly once.
///
/// Frequencies come from the whole input before any cell is nulled.
pub fn remove_singletons(values: &[CellValue]) -> Vec<CellValue> {
    let counts = value_frequencies(values);
    values
        .iter()
        .map(|value| match value.key() {
            Some(key) if counts.get(&key) == Some(&1) => CellValue::Null,
            _ => value.clone(),
        })
        .collect()
}
