use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ficha_cli::types::CleanRunResult;
use ficha_model::{CleaningReport, MissingValueReport};

pub fn print_summary(result: &CleanRunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Cleaned file saved to: {}", path.display()),
        None => println!("Dry run: no output written"),
    }
    if let Some(path) = &result.report_json {
        println!("Report: {}", path.display());
    }
    println!("Rows: {}", result.report.row_count);
    print_step_table(&result.report);
    print_missing_table(&result.report.missing);
}

fn print_step_table(report: &CleaningReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Nulled"),
        header_cell("Rewritten"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for step in &report.steps {
        table.add_row(vec![
            Cell::new(&step.step),
            count_cell(step.total_nulled(), Color::Yellow),
            count_cell(step.total_rewritten(), Color::Green),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(report.total_nulled(), Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(report.total_rewritten(), Color::Green).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_missing_table(missing: &MissingValueReport) {
    if missing.is_empty() {
        println!("No missing values remain.");
        return;
    }
    println!("Remaining missing values:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing"),
        header_cell("% of rows"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in &missing.columns {
        let share = missing
            .ratio(&entry.column)
            .map_or_else(|| "-".to_string(), |ratio| format!("{:.1}", ratio * 100.0));
        table.add_row(vec![
            Cell::new(&entry.column),
            count_cell(entry.nulls, Color::Yellow),
            dim_cell(share),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
