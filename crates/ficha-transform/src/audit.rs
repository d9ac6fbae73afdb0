//! Missing-value audit.

use ficha_model::{MissingCount, MissingValueReport, Table};

/// Null counts per column, in table order, for columns with at least one null.
pub fn missing_values(table: &Table) -> MissingValueReport {
    let columns = table
        .columns()
        .iter()
        .filter_map(|column| {
            let nulls = column.null_count();
            (nulls > 0).then(|| MissingCount {
                column: column.name.clone(),
                nulls,
            })
        })
        .collect();
    MissingValueReport {
        row_count: table.row_count(),
        columns,
    }
}
