//! Configuration options for a cleaning run.

use serde::{Deserialize, Serialize};

/// What to do with a boolean-column literal outside `0/1/true/false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BooleanPolicy {
    /// Fail the run with the offending column, row and literal.
    #[default]
    Reject,
    /// Null the cell; the step audit records how many cells were nulled.
    Null,
}

/// Options controlling cleaning behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleaningOptions {
    /// Handling of unknown boolean literals.
    pub boolean_policy: BooleanPolicy,
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that null unknown boolean literals instead of failing.
    pub fn lenient() -> Self {
        Self {
            boolean_policy: BooleanPolicy::Null,
        }
    }
}
