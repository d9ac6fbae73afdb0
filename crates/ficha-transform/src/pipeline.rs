//! Fixed-order cleaning pipeline.
//!
//! Each step is a `Table -> Table` transformation behind [`CleaningStep`].
//! The pipeline validates the declared schema before any step runs, then
//! executes the standard steps in order:
//!
//! 1. **boolean_normalization** - flags to `true`/`false`
//! 2. **categorical_normalization** - trimmed lowercase text
//! 3. **date_normalization** - timestamps, future dates nulled
//! 4. **race_validation**, **religion_validation**, **income_validation**,
//!    **gender_identity_validation** - column domain rules
//! 5. **communication_collapse**, **care_seeking_collapse** - label folding
//! 6. **transport_singletons** - singleton filter
//! 7. **height_weight_ranges** - plausibility ranges
//! 8. **pressure_correction** - pressure units and visit counts
//!
//! The missing-value audit runs last. Categorical normalization has to
//! precede the validators, which compare against lowercase labels.

use ficha_model::schema::{
    CARE_SEEKING_COLUMN, COMMUNICATION_COLUMN, GENDER_IDENTITY_COLUMN, HEIGHT_COLUMN,
    INCOME_COLUMN, PRESSURE_COLUMNS, RACE_COLUMN, RELIGION_COLUMN, TRANSPORT_COLUMN,
    VISIT_COUNT_COLUMNS, WEIGHT_COLUMN,
};
use ficha_model::{
    BOOLEAN_COLUMNS, BooleanPolicy, CATEGORICAL_COLUMNS, CellValue, CleaningReport, Column,
    ColumnChange, DATE_COLUMNS, StepReport, Table, required_columns,
};
use tracing::{debug, info};

use crate::audit::missing_values;
use crate::collapse::collapse_label;
use crate::context::CleaningContext;
use crate::error::CleanError;
use crate::normalization::{
    normalize_boolean, normalize_categorical, normalize_date, normalize_numeric,
};
use crate::outliers::{HEIGHT_RANGE, WEIGHT_RANGE, filter_range, remove_singletons};
use crate::pressure::correct_pressure;
use crate::validators::{
    validate_gender_identity, validate_income, validate_race, validate_religion,
};

/// A single cleaning step.
pub trait CleaningStep: Send + Sync {
    /// Name used in logs and in the step audit.
    fn step_name(&self) -> &str;

    /// Columns this step may rewrite. Nothing else is touched.
    fn columns(&self) -> &[&'static str];

    /// Applies the step. Must keep the row count.
    fn apply(&self, table: Table, ctx: &CleaningContext) -> Result<Table, CleanError>;
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub table: Table,
    pub report: CleaningReport,
}

/// The standard step sequence. The order is fixed.
pub struct CleaningPipeline {
    steps: Vec<Box<dyn CleaningStep>>,
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl CleaningPipeline {
    pub fn standard() -> Self {
        let steps: Vec<Box<dyn CleaningStep>> = vec![
            Box::new(BooleanStep),
            Box::new(CategoricalStep),
            Box::new(DateStep),
            Box::new(ColumnRuleStep::new("race_validation", RACE_COLUMN, validate_race)),
            Box::new(ColumnRuleStep::new(
                "religion_validation",
                RELIGION_COLUMN,
                validate_religion,
            )),
            Box::new(ColumnRuleStep::new(
                "income_validation",
                INCOME_COLUMN,
                validate_income,
            )),
            Box::new(ColumnRuleStep::new(
                "gender_identity_validation",
                GENDER_IDENTITY_COLUMN,
                validate_gender_identity,
            )),
            Box::new(ColumnRuleStep::new(
                "communication_collapse",
                COMMUNICATION_COLUMN,
                collapse_label,
            )),
            Box::new(ColumnRuleStep::new(
                "care_seeking_collapse",
                CARE_SEEKING_COLUMN,
                collapse_label,
            )),
            Box::new(SingletonStep {
                name: "transport_singletons",
                column: TRANSPORT_COLUMN,
            }),
            Box::new(RangeFilterStep),
            Box::new(PressureStep),
        ];
        Self { steps }
    }

    /// List step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.step_name()).collect()
    }

    /// Runs every step, then the missing-value audit.
    ///
    /// Structural problems fail the run before any step executes.
    pub fn run(&self, table: Table, ctx: &CleaningContext) -> Result<CleaningOutcome, CleanError> {
        validate_schema(&table)?;

        let row_count = table.row_count();
        let mut table = table;
        let mut steps = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let before = step
                .columns()
                .iter()
                .map(|name| table.column(name).cloned())
                .collect::<Result<Vec<_>, _>>()?;

            table = step.apply(table, ctx)?;
            if table.row_count() != row_count {
                return Err(CleanError::RowCountChanged {
                    step: step.step_name().to_string(),
                    before: row_count,
                    after: table.row_count(),
                });
            }

            let report = diff_columns(step.step_name(), &before, &table)?;
            debug!(
                step = step.step_name(),
                nulled = report.total_nulled(),
                rewritten = report.total_rewritten(),
                "step finished"
            );
            steps.push(report);
        }

        let missing = missing_values(&table);
        info!(
            rows = row_count,
            steps = steps.len(),
            remaining_nulls = missing.total(),
            "cleaning finished"
        );

        Ok(CleaningOutcome {
            table,
            report: CleaningReport {
                row_count,
                steps,
                missing,
            },
        })
    }
}

/// Runs the standard pipeline.
pub fn clean_table(table: Table, ctx: &CleaningContext) -> Result<CleaningOutcome, CleanError> {
    CleaningPipeline::standard().run(table, ctx)
}

/// Checks that the table has rows and every declared column.
pub fn validate_schema(table: &Table) -> Result<(), CleanError> {
    if table.row_count() == 0 {
        return Err(CleanError::EmptyTable);
    }
    let columns = table.missing_columns(required_columns());
    if !columns.is_empty() {
        return Err(CleanError::MissingColumns { columns });
    }
    Ok(())
}

fn diff_columns(step: &str, before: &[Column], after: &Table) -> Result<StepReport, CleanError> {
    let mut changes = Vec::with_capacity(before.len());
    for old in before {
        let new = after.column(&old.name)?;
        let mut change = ColumnChange {
            column: old.name.clone(),
            nulled: 0,
            rewritten: 0,
        };
        for (old_value, new_value) in old.values.iter().zip(&new.values) {
            match (old_value.is_null(), new_value.is_null()) {
                (false, true) => change.nulled += 1,
                (false, false) if old_value != new_value => change.rewritten += 1,
                _ => {}
            }
        }
        changes.push(change);
    }
    Ok(StepReport {
        step: step.to_string(),
        changes,
    })
}

// ============================================================================
// Standard steps
// ============================================================================

/// Normalizes the boolean columns, applying the configured [`BooleanPolicy`].
pub struct BooleanStep;

impl CleaningStep for BooleanStep {
    fn step_name(&self) -> &str {
        "boolean_normalization"
    }

    fn columns(&self) -> &[&'static str] {
        &BOOLEAN_COLUMNS
    }

    fn apply(&self, table: Table, ctx: &CleaningContext) -> Result<Table, CleanError> {
        let policy = ctx.options.boolean_policy;
        BOOLEAN_COLUMNS
            .iter()
            .try_fold(table, |table, column| {
                table.try_map_column(column, |row, value| {
                    match (normalize_boolean(value), policy) {
                        (Some(flag), _) => Ok(flag),
                        (None, BooleanPolicy::Null) => Ok(CellValue::Null),
                        (None, BooleanPolicy::Reject) => Err(CleanError::InvalidBooleanLiteral {
                            column: (*column).to_string(),
                            row,
                            literal: value.render(),
                        }),
                    }
                })
            })
    }
}

pub struct CategoricalStep;

impl CleaningStep for CategoricalStep {
    fn step_name(&self) -> &str {
        "categorical_normalization"
    }

    fn columns(&self) -> &[&'static str] {
        &CATEGORICAL_COLUMNS
    }

    fn apply(&self, table: Table, _ctx: &CleaningContext) -> Result<Table, CleanError> {
        map_columns(table, &CATEGORICAL_COLUMNS, normalize_categorical)
    }
}

/// Parses the date columns against the context's reference time.
pub struct DateStep;

impl CleaningStep for DateStep {
    fn step_name(&self) -> &str {
        "date_normalization"
    }

    fn columns(&self) -> &[&'static str] {
        &DATE_COLUMNS
    }

    fn apply(&self, table: Table, ctx: &CleaningContext) -> Result<Table, CleanError> {
        let now = ctx.now;
        map_columns(table, &DATE_COLUMNS, |value| normalize_date(value, now))
    }
}

/// Applies a per-cell rule to one column.
pub struct ColumnRuleStep {
    name: &'static str,
    column: &'static str,
    rule: fn(&CellValue) -> CellValue,
}

impl ColumnRuleStep {
    pub fn new(name: &'static str, column: &'static str, rule: fn(&CellValue) -> CellValue) -> Self {
        Self { name, column, rule }
    }
}

impl CleaningStep for ColumnRuleStep {
    fn step_name(&self) -> &str {
        self.name
    }

    fn columns(&self) -> &[&'static str] {
        std::slice::from_ref(&self.column)
    }

    fn apply(&self, table: Table, _ctx: &CleaningContext) -> Result<Table, CleanError> {
        Ok(table.map_column(self.column, self.rule)?)
    }
}

/// Nulls values that occur once in a column.
pub struct SingletonStep {
    name: &'static str,
    column: &'static str,
}

impl CleaningStep for SingletonStep {
    fn step_name(&self) -> &str {
        self.name
    }

    fn columns(&self) -> &[&'static str] {
        std::slice::from_ref(&self.column)
    }

    fn apply(&self, table: Table, _ctx: &CleaningContext) -> Result<Table, CleanError> {
        let values = remove_singletons(&table.column(self.column)?.values);
        Ok(table.replace_column(Column::new(self.column, values))?)
    }
}

/// Height and weight plausibility ranges.
pub struct RangeFilterStep;

impl CleaningStep for RangeFilterStep {
    fn step_name(&self) -> &str {
        "height_weight_ranges"
    }

    fn columns(&self) -> &[&'static str] {
        &[HEIGHT_COLUMN, WEIGHT_COLUMN]
    }

    fn apply(&self, table: Table, _ctx: &CleaningContext) -> Result<Table, CleanError> {
        Ok(table
            .map_column(HEIGHT_COLUMN, |value| filter_range(value, HEIGHT_RANGE))?
            .map_column(WEIGHT_COLUMN, |value| filter_range(value, WEIGHT_RANGE))?)
    }
}

const PRESSURE_STEP_COLUMNS: [&str; 4] = [
    PRESSURE_COLUMNS[0],
    PRESSURE_COLUMNS[1],
    VISIT_COUNT_COLUMNS[0],
    VISIT_COUNT_COLUMNS[1],
];

/// Pressure unit correction plus numeric coercion of the visit counts.
pub struct PressureStep;

impl CleaningStep for PressureStep {
    fn step_name(&self) -> &str {
        "pressure_correction"
    }

    fn columns(&self) -> &[&'static str] {
        &PRESSURE_STEP_COLUMNS
    }

    fn apply(&self, table: Table, _ctx: &CleaningContext) -> Result<Table, CleanError> {
        let table = map_columns(table, &PRESSURE_COLUMNS, correct_pressure)?;
        map_columns(table, &VISIT_COUNT_COLUMNS, normalize_numeric)
    }
}

fn map_columns<F>(table: Table, columns: &[&str], mut rule: F) -> Result<Table, CleanError>
where
    F: FnMut(&CellValue) -> CellValue,
{
    columns.iter().try_fold(table, |table, column| {
        Ok(table.map_column(column, &mut rule)?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_order() {
        let pipeline = CleaningPipeline::standard();
        assert_eq!(
            pipeline.step_names(),
            vec![
                "boolean_normalization",
                "categorical_normalization",
                "date_normalization",
                "race_validation",
                "religion_validation",
                "income_validation",
                "gender_identity_validation",
                "communication_collapse",
                "care_seeking_collapse",
                "transport_singletons",
                "height_weight_ranges",
                "pressure_correction",
            ]
        );
    }

    #[test]
    fn empty_table_is_structural_error() {
        assert!(matches!(
            validate_schema(&Table::default()),
            Err(CleanError::EmptyTable)
        ));
    }

    #[test]
    fn missing_columns_are_all_named() {
        let table = Table::from_columns(vec![Column::new("obito", vec![CellValue::text("1")])])
            .unwrap();
        let Err(CleanError::MissingColumns { columns }) = validate_schema(&table) else {
            panic!("expected missing columns");
        };
        assert_eq!(columns.len(), required_columns().count() - 1);
        assert!(!columns.iter().any(|name| name == "obito"));
    }
}
