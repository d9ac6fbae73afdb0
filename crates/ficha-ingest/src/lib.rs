pub mod csv_table;
pub mod error;
pub mod polars_utils;

pub use csv_table::{NULL_TOKENS, dataframe_to_table, normalize_header, read_csv_table};
pub use error::IngestError;
pub use polars_utils::any_to_cell;
