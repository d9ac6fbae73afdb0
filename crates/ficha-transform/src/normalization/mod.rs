//! Type normalizers.
//!
//! - **boolean**: `0/1/true/false` flags
//! - **text**: trimmed lowercase categorical text
//! - **datetime**: free-text dates to timestamps, future dates rejected
//! - **numeric**: decimal parsing with comma separators

pub mod boolean;
pub mod datetime;
pub mod numeric;
pub mod text;

pub use boolean::normalize_boolean;
pub use datetime::{normalize_date, parse_timestamp};
pub use numeric::{normalize_numeric, parse_decimal};
pub use text::normalize_categorical;
