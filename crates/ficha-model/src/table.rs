#![deny(unsafe_code)]

use std::collections::HashSet;

use chrono::{NaiveDateTime, NaiveTime};

use crate::error::{ModelError, Result};

/// A single cell of the registry table.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Text(String),
    Number(f64),
    Timestamp(NaiveDateTime),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Timestamp(value) => Some(*value),
            _ => None,
        }
    }

    /// Hashable identity of the value, `None` for nulls.
    pub fn key(&self) -> Option<ValueKey> {
        match self {
            Self::Null => None,
            Self::Bool(value) => Some(ValueKey::Bool(*value)),
            Self::Text(value) => Some(ValueKey::Text(value.clone())),
            Self::Number(value) => {
                // -0.0 and 0.0 are the same category
                let normalized = if *value == 0.0 { 0.0 } else { *value };
                Some(ValueKey::Number(normalized.to_bits()))
            }
            Self::Timestamp(value) => Some(ValueKey::Timestamp(*value)),
        }
    }

    /// Renders the value the way it is written to a delimited file.
    ///
    /// Nulls render as an empty string. Timestamps at midnight render as a
    /// bare date so date-only columns stay date-only.
    pub fn render(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(value) => value.to_string(),
            Self::Text(value) => value.clone(),
            Self::Number(value) => format_numeric(*value),
            Self::Timestamp(value) => {
                if value.time() == NaiveTime::MIN {
                    value.format("%Y-%m-%d").to_string()
                } else {
                    value.format("%Y-%m-%d %H:%M:%S%.f").to_string()
                }
            }
        }
    }
}

/// Frequency key for a non-null cell. Numbers compare by bit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKey {
    Bool(bool),
    Text(String),
    Number(u64),
    Timestamp(NaiveDateTime),
}

/// Formats a floating-point number without trailing fractional zeros.
///
/// ```
/// use ficha_model::format_numeric;
///
/// assert_eq!(format_numeric(120.0), "120");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(100.0), "100");
/// ```
pub fn format_numeric(value: f64) -> String {
    let s = format!("{value}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_null()).count()
    }
}

/// Ordered, row-aligned collection of columns.
///
/// Every column holds exactly [`Table::row_count`] cells and column names are
/// unique. Both properties are checked whenever a column enters the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Creates an empty table with the given row count and no columns.
    pub fn with_rows(rows: usize) -> Self {
        Self {
            columns: Vec::new(),
            rows,
        }
    }

    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let rows = columns.first().map_or(0, Column::len);
        let mut table = Self::with_rows(rows);
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.has_column(&column.name) {
            return Err(ModelError::DuplicateColumn { name: column.name });
        }
        if column.len() != self.rows {
            return Err(ModelError::RowCountMismatch {
                column: column.name,
                expected: self.rows,
                actual: column.values.len(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .ok_or_else(|| ModelError::MissingColumn {
                name: name.to_string(),
            })
    }

    /// Returns the names from `names` that are not present in the table.
    pub fn missing_columns<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let present: HashSet<&str> = self.column_names().collect();
        names
            .into_iter()
            .filter(|name| !present.contains(name))
            .map(str::to_string)
            .collect()
    }

    fn column_mut(&mut self, name: &str) -> Result<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.name == name)
            .ok_or_else(|| ModelError::MissingColumn {
                name: name.to_string(),
            })
    }

    /// Swaps in a new version of an existing column.
    pub fn replace_column(mut self, column: Column) -> Result<Self> {
        let rows = self.rows;
        let slot = self.column_mut(&column.name)?;
        if column.len() != rows {
            return Err(ModelError::RowCountMismatch {
                column: column.name,
                expected: rows,
                actual: column.values.len(),
            });
        }
        *slot = column;
        Ok(self)
    }

    /// Rewrites every cell of one column with a per-cell rule.
    pub fn map_column<F>(mut self, name: &str, mut rule: F) -> Result<Self>
    where
        F: FnMut(&CellValue) -> CellValue,
    {
        let column = self.column_mut(name)?;
        for value in &mut column.values {
            *value = rule(value);
        }
        Ok(self)
    }

    /// Like [`Table::map_column`] but the rule sees the row index and may fail.
    pub fn try_map_column<F, E>(mut self, name: &str, mut rule: F) -> std::result::Result<Self, E>
    where
        F: FnMut(usize, &CellValue) -> std::result::Result<CellValue, E>,
        E: From<ModelError>,
    {
        let column = self.column_mut(name)?;
        for (row, value) in column.values.iter_mut().enumerate() {
            *value = rule(row, value)?;
        }
        Ok(self)
    }

    /// Iterates rows as slices of cell references in column order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&CellValue>> + '_ {
        (0..self.rows).map(move |row| {
            self.columns
                .iter()
                .map(|column| &column.values[row])
                .collect()
        })
    }
}
