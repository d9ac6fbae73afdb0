//! Registry record sanitization.
//!
//! This crate holds the cleaning rules and the pipeline that applies them:
//!
//! - **normalization**: boolean, categorical text, datetime and numeric coercion
//! - **validators**: column-specific domain rules (race, religion, income, gender identity)
//! - **collapse**: Unicode-aware label folding for near-duplicate categories
//! - **outliers**: plausibility ranges and the singleton filter
//! - **pressure**: unit correction for blood-pressure readings
//! - **audit**: missing-value report
//! - **pipeline**: fixed-order step execution with per-step change audit

pub mod audit;
pub mod collapse;
pub mod context;
pub mod error;
pub mod normalization;
pub mod outliers;
pub mod pipeline;
pub mod pressure;
pub mod validators;

pub use audit::missing_values;
pub use collapse::{collapse_label, fold_label};
pub use context::CleaningContext;
pub use error::CleanError;
pub use pipeline::{CleaningOutcome, CleaningPipeline, CleaningStep, clean_table, validate_schema};
