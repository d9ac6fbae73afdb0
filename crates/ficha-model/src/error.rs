use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column not found: {name}")]
    MissingColumn { name: String },

    #[error("duplicate column name: {name}")]
    DuplicateColumn { name: String },

    #[error("column {column} has {actual} rows, expected {expected}")]
    RowCountMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
