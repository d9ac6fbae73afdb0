use std::path::PathBuf;

use ficha_model::ModelError;
use polars::prelude::PolarsError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file is empty: {path}")]
    Empty { path: PathBuf },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("failed to convert data frame: {0}")]
    Frame(#[from] PolarsError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
