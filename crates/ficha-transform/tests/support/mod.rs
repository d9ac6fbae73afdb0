//! Registry fixtures shared by the integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use ficha_model::{CellValue, Column, Table, required_columns};

/// Reference time used for future-date detection in tests.
pub fn reference_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// A registry row where every declared column holds a valid raw value.
pub fn valid_row() -> Vec<(&'static str, CellValue)> {
    vec![
        ("obito", CellValue::text("0")),
        ("luz_eletrica", CellValue::text("1")),
        ("em_situacao_de_rua", CellValue::text("false")),
        ("frequenta_escola", CellValue::text("True")),
        ("possui_plano_saude", CellValue::Number(0.0)),
        ("vulnerabilidade_social", CellValue::Bool(true)),
        ("familia_beneficiaria_auxilio_brasil", CellValue::text("0")),
        ("crianca_matriculada_creche_pre_escola", CellValue::text("1")),
        ("identidade_genero", CellValue::text(" Mulher Cisgênero ")),
        ("orientacao_sexual", CellValue::text("Heterossexual")),
        ("bairro", CellValue::text("Centro")),
        ("raca_cor", CellValue::text("Parda")),
        ("ocupacao", CellValue::text("Agricultor")),
        ("religiao", CellValue::text("Católica")),
        ("data_cadastro", CellValue::text("2020-01-15")),
        ("data_nascimento", CellValue::text("20/05/1980")),
        ("data_atualizacao_cadastro", CellValue::text("2023-03-01")),
        ("updated_at", CellValue::text("2023-03-01 10:00:00")),
        ("altura", CellValue::Number(1.7)),
        ("peso", CellValue::Number(70.0)),
        ("pressao_sistolica", CellValue::text("12,0")),
        ("pressao_diastolica", CellValue::text("80")),
        ("n_atendimentos_atencao_primaria", CellValue::Number(2.0)),
        ("n_atendimentos_hospital", CellValue::Number(0.0)),
        ("renda_familiar", CellValue::text("1 a 2 Salário(s) Mínimo(s)")),
        ("meios_comunicacao", CellValue::text("Televisão")),
        ("em_caso_doenca_procura", CellValue::text("Posto de Saúde")),
        ("meios_transporte", CellValue::text("Ônibus")),
    ]
}

/// Builds a table of `rows` valid rows, then applies per-cell overrides.
pub struct Fixture {
    rows: usize,
    overrides: Vec<(usize, &'static str, CellValue)>,
}

impl Fixture {
    pub fn rows(rows: usize) -> Self {
        Self {
            rows,
            overrides: Vec::new(),
        }
    }

    pub fn set(mut self, row: usize, column: &'static str, value: CellValue) -> Self {
        self.overrides.push((row, column, value));
        self
    }

    pub fn build(self) -> Table {
        let defaults = valid_row();
        assert_eq!(defaults.len(), required_columns().count());
        let columns = defaults
            .into_iter()
            .map(|(name, value)| {
                let mut values = vec![value; self.rows];
                for (row, column, value) in &self.overrides {
                    if *column == name {
                        values[*row] = value.clone();
                    }
                }
                Column::new(name, values)
            })
            .collect();
        Table::from_columns(columns).unwrap()
    }
}

pub fn cell<'a>(table: &'a Table, column: &str, row: usize) -> &'a CellValue {
    &table.column(column).unwrap().values[row]
}
