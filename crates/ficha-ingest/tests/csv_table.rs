use std::fs;
use std::path::PathBuf;

use ficha_ingest::{IngestError, normalize_header, read_csv_table};
use ficha_model::CellValue;
use tempfile::TempDir;

fn temp_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_every_cell_as_text() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_csv(
        &dir,
        "ficha.csv",
        "bairro,altura,pressao_sistolica,obito\n\
         Centro,1.70,\"12,0\",0\n\
         Vila Nova,,120,1\n",
    );
    let table = read_csv_table(&path).expect("read csv");

    assert_eq!(table.row_count(), 2);
    let names: Vec<&str> = table.column_names().collect();
    assert_eq!(names, vec!["bairro", "altura", "pressao_sistolica", "obito"]);

    let altura = &table.column("altura").unwrap().values;
    assert_eq!(altura[0], CellValue::text("1.70"));
    assert_eq!(altura[1], CellValue::Null);

    let pressure = &table.column("pressao_sistolica").unwrap().values;
    assert_eq!(pressure[0], CellValue::text("12,0"));
    assert_eq!(pressure[1], CellValue::text("120"));

    let obito = &table.column("obito").unwrap().values;
    assert_eq!(obito[0], CellValue::text("0"));
    assert_eq!(obito[1], CellValue::text("1"));
}

#[test]
fn keeps_leading_zeros_and_compact_dates() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_csv(
        &dir,
        "codes.csv",
        "bairro,data_cadastro,codigo_interno\n01,20200115,007\n02,20200116,010\n",
    );
    let table = read_csv_table(&path).expect("read csv");

    let bairro = &table.column("bairro").unwrap().values;
    assert_eq!(bairro, &vec![CellValue::text("01"), CellValue::text("02")]);

    let dates = &table.column("data_cadastro").unwrap().values;
    assert_eq!(
        dates,
        &vec![CellValue::text("20200115"), CellValue::text("20200116")]
    );

    let codes = &table.column("codigo_interno").unwrap().values;
    assert_eq!(codes, &vec![CellValue::text("007"), CellValue::text("010")]);
}

#[test]
fn null_tokens_read_as_null() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_csv(&dir, "nulls.csv", "religiao,ocupacao\nNA,pedreiro\ncatólica,NULL\n");
    let table = read_csv_table(&path).expect("read csv");

    assert_eq!(table.column("religiao").unwrap().null_count(), 1);
    assert_eq!(table.column("ocupacao").unwrap().null_count(), 1);
}

#[test]
fn empty_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = temp_csv(&dir, "empty.csv", "");
    let err = read_csv_table(&path).unwrap_err();
    assert!(matches!(err, IngestError::Empty { .. }));
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = read_csv_table(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
}

#[test]
fn headers_are_normalized() {
    assert_eq!(normalize_header("\u{feff} data_cadastro "), "data_cadastro");
    assert_eq!(normalize_header("meios   de  transporte"), "meios de transporte");
}
