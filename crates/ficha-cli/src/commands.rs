use anyhow::Result;
use chrono::Local;
use comfy_table::Table;
use ficha_model::{CleaningOptions, ColumnGroup};
use ficha_transform::CleaningContext;
use tracing::info;

use ficha_cli::pipeline::{OutputConfig, clean, default_output_path, ingest, output};
use ficha_cli::types::CleanRunResult;

use crate::cli::CleanArgs;
use crate::summary::apply_table_style;

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Group", "Columns"]);
    apply_table_style(&mut table);
    for group in ColumnGroup::ALL {
        table.add_row(vec![group.display_name().to_string(), group.columns().join("\n")]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanRunResult> {
    let now = args.now.unwrap_or_else(|| Local::now().naive_local());
    let options = if args.null_invalid_booleans {
        CleaningOptions::lenient()
    } else {
        CleaningOptions::new()
    };
    let ctx = CleaningContext::new(now).with_options(options);

    let table = ingest(&args.input)?;
    let outcome = clean(table, &ctx)?;

    let (output_path, report_path) = if args.dry_run {
        info!("dry run, no files written");
        (None, None)
    } else {
        let table_path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        output(
            &outcome,
            &OutputConfig {
                table_path: &table_path,
                report_path: args.report_json.as_deref(),
            },
        )?;
        (Some(table_path), args.report_json.clone())
    };

    Ok(CleanRunResult {
        input: args.input.clone(),
        output: output_path,
        report_json: report_path,
        report: outcome.report,
    })
}
