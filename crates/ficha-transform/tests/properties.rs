//! Property tests for the cleaning rules.

mod support;

use ficha_model::{CellValue, CleaningOptions};
use ficha_transform::normalization::normalize_categorical;
use ficha_transform::outliers::{HEIGHT_RANGE, WEIGHT_RANGE, filter_range, remove_singletons};
use ficha_transform::pressure::correct_pressure;
use ficha_transform::validators::{GENDER_IDENTITY_REJECTS, RACE_LABELS};
use ficha_transform::{CleaningContext, clean_table, fold_label};
use proptest::prelude::*;

use support::{Fixture, reference_now};

proptest! {
    #[test]
    fn fold_label_is_idempotent(raw in "[A-Za-zÀ-ÿ ]{0,20}") {
        let once = fold_label(&raw);
        prop_assert_eq!(fold_label(&once), once);
    }

    #[test]
    fn categorical_is_idempotent(raw in "[ A-Za-zÀ-ÿ]{0,12}") {
        let once = normalize_categorical(&CellValue::text(raw));
        prop_assert_eq!(normalize_categorical(&once), once);
    }

    #[test]
    fn ranges_contain_every_kept_value(value in -10.0f64..400.0) {
        match filter_range(&CellValue::Number(value), HEIGHT_RANGE) {
            CellValue::Number(kept) => prop_assert!((0.5..=2.5).contains(&kept)),
            other => prop_assert_eq!(other, CellValue::Null),
        }
        match filter_range(&CellValue::Number(value), WEIGHT_RANGE) {
            CellValue::Number(kept) => prop_assert!((2.0..=300.0).contains(&kept)),
            other => prop_assert_eq!(other, CellValue::Null),
        }
    }

    #[test]
    fn singleton_filter_is_idempotent(labels in prop::collection::vec("[abc]", 0..12)) {
        let values: Vec<_> = labels.into_iter().map(CellValue::text).collect();
        let once = remove_singletons(&values);
        prop_assert_eq!(once.len(), values.len());
        prop_assert_eq!(remove_singletons(&once), once);
    }

    #[test]
    fn pressure_correction_is_idempotent(raw in "[0-9]{1,3}(,[0-9]{0,2})?") {
        let once = correct_pressure(&CellValue::text(raw));
        prop_assert_eq!(correct_pressure(&once), once);
    }

    #[test]
    fn pipeline_keeps_rows_and_domains(
        races in prop::collection::vec("(Parda|BRANCA| preta|azul|indígena|  )", 1..8),
        identities in prop::collection::vec("(Não|sim|Mulher|homem trans|Bissexual)", 1..8),
    ) {
        let rows = races.len().min(identities.len());
        let mut fixture = Fixture::rows(rows);
        for row in 0..rows {
            fixture = fixture
                .set(row, "raca_cor", CellValue::text(races[row].clone()))
                .set(row, "identidade_genero", CellValue::text(identities[row].clone()));
        }
        let ctx = CleaningContext::new(reference_now()).with_options(CleaningOptions::lenient());
        let outcome = clean_table(fixture.build(), &ctx).unwrap();
        prop_assert_eq!(outcome.table.row_count(), rows);

        for value in &outcome.table.column("raca_cor").unwrap().values {
            match value {
                CellValue::Null => {}
                CellValue::Text(label) => prop_assert!(RACE_LABELS.contains(&label.as_str())),
                other => prop_assert!(false, "unexpected race cell {:?}", other),
            }
        }
        for value in &outcome.table.column("identidade_genero").unwrap().values {
            if let CellValue::Text(label) = value {
                let folded = fold_label(label);
                prop_assert!(
                    !GENDER_IDENTITY_REJECTS
                        .iter()
                        .any(|reject| fold_label(reject) == folded)
                );
            }
        }
    }
}
