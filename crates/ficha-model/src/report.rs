//! Audit records produced by a cleaning run.

use serde::{Deserialize, Serialize};

/// Cells changed by one step in one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnChange {
    pub column: String,
    /// Non-null cells that became null.
    pub nulled: usize,
    /// Non-null cells rewritten to a different non-null value.
    pub rewritten: usize,
}

impl ColumnChange {
    pub fn is_empty(&self) -> bool {
        self.nulled == 0 && self.rewritten == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub step: String,
    pub changes: Vec<ColumnChange>,
}

impl StepReport {
    pub fn total_nulled(&self) -> usize {
        self.changes.iter().map(|change| change.nulled).sum()
    }

    pub fn total_rewritten(&self) -> usize {
        self.changes.iter().map(|change| change.rewritten).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCount {
    pub column: String,
    pub nulls: usize,
}

/// Remaining nulls per column, only for columns with at least one null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingValueReport {
    pub row_count: usize,
    pub columns: Vec<MissingCount>,
}

impl MissingValueReport {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|entry| entry.column == column)
            .map(|entry| entry.nulls)
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(|entry| entry.nulls).sum()
    }

    /// Share of rows that are null in `column`, between 0 and 1.
    pub fn ratio(&self, column: &str) -> Option<f64> {
        if self.row_count == 0 {
            return None;
        }
        self.get(column)
            .map(|nulls| nulls as f64 / self.row_count as f64)
    }
}

/// Complete audit of one run, serialized by the reporting collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub row_count: usize,
    pub steps: Vec<StepReport>,
    pub missing: MissingValueReport,
}

impl CleaningReport {
    pub fn total_nulled(&self) -> usize {
        self.steps.iter().map(StepReport::total_nulled).sum()
    }

    pub fn total_rewritten(&self) -> usize {
        self.steps.iter().map(StepReport::total_rewritten).sum()
    }
}
