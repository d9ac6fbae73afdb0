use ficha_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("input table has no rows")]
    EmptyTable,

    #[error("input table is missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// `row` is the zero-based data row (header excluded).
    #[error("invalid boolean literal {literal:?} in column {column} at row {row}")]
    InvalidBooleanLiteral {
        column: String,
        row: usize,
        literal: String,
    },

    #[error("step {step} changed the row count from {before} to {after}")]
    RowCountChanged {
        step: String,
        before: usize,
        after: usize,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}
