//! Tests for ficha-model types.

use ficha_model::{
    BooleanPolicy, CellValue, CleaningOptions, CleaningReport, Column, ColumnChange, MissingCount,
    MissingValueReport, StepReport, Table, required_columns,
};

fn sample_table() -> Table {
    Table::from_columns(vec![
        Column::new(
            "bairro",
            vec![CellValue::text("Centro"), CellValue::Null, CellValue::text("Vila")],
        ),
        Column::new(
            "peso",
            vec![
                CellValue::Number(70.5),
                CellValue::Number(80.0),
                CellValue::Null,
            ],
        ),
    ])
    .expect("aligned table")
}

#[test]
fn map_column_preserves_row_count() {
    let table = sample_table();
    let mapped = table
        .map_column("bairro", |_| CellValue::Null)
        .expect("column exists");
    assert_eq!(mapped.row_count(), 3);
    assert_eq!(mapped.column("bairro").unwrap().null_count(), 3);
    assert_eq!(mapped.column("peso").unwrap().null_count(), 1);
}

#[test]
fn map_column_reports_missing_column() {
    let err = sample_table()
        .map_column("altura", Clone::clone)
        .unwrap_err();
    assert_eq!(err.to_string(), "column not found: altura");
}

#[test]
fn replace_column_checks_length() {
    let err = sample_table()
        .replace_column(Column::new("peso", vec![CellValue::Null]))
        .unwrap_err();
    assert_eq!(err.to_string(), "column peso has 1 rows, expected 3");
}

#[test]
fn rows_follow_column_order() {
    let table = sample_table();
    let rendered: Vec<Vec<String>> = table
        .rows()
        .map(|row| row.into_iter().map(CellValue::render).collect())
        .collect();
    assert_eq!(
        rendered,
        vec![
            vec!["Centro".to_string(), "70.5".to_string()],
            vec![String::new(), "80".to_string()],
            vec!["Vila".to_string(), String::new()],
        ]
    );
}

#[test]
fn missing_columns_lists_absent_names() {
    let table = sample_table();
    let missing = table.missing_columns(["bairro", "altura", "peso", "obito"]);
    assert_eq!(missing, vec!["altura".to_string(), "obito".to_string()]);
}

#[test]
fn required_schema_has_every_group() {
    let required: Vec<&str> = required_columns().collect();
    assert_eq!(required.len(), 28);
    assert!(required.contains(&"obito"));
    assert!(required.contains(&"meios_transporte"));
    assert!(required.contains(&"pressao_diastolica"));
}

#[test]
fn default_boolean_policy_rejects() {
    assert_eq!(CleaningOptions::new().boolean_policy, BooleanPolicy::Reject);
    assert_eq!(CleaningOptions::lenient().boolean_policy, BooleanPolicy::Null);
}

#[test]
fn missing_report_ratio() {
    let report = MissingValueReport {
        row_count: 4,
        columns: vec![MissingCount {
            column: "peso".to_string(),
            nulls: 1,
        }],
    };
    assert_eq!(report.ratio("peso"), Some(0.25));
    assert_eq!(report.ratio("altura"), None);
    assert_eq!(report.total(), 1);
}

#[test]
fn report_serializes() {
    let report = CleaningReport {
        row_count: 2,
        steps: vec![StepReport {
            step: "range_filter".to_string(),
            changes: vec![ColumnChange {
                column: "altura".to_string(),
                nulled: 1,
                rewritten: 0,
            }],
        }],
        missing: MissingValueReport::default(),
    };
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: CleaningReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round, report);
    assert_eq!(round.total_nulled(), 1);
}
