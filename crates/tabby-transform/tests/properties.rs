//! Property tests for classification, editing and imputation.

use proptest::prelude::*;
use tabby_model::{ColumnType, Table, is_missing};
use tabby_transform::numeric::is_decimal_literal;
use tabby_transform::{ColumnTarget, change_values, classify_columns, impute_missing};

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("None".to_string()),
        Just("NaN".to_string()),
        "[0-9]{1,4}",
        "[0-9]{1,3}\\.[0-9]{1,2}",
        "[a-c]{1,2}",
        Just("-".to_string()),
    ]
}

fn arb_table() -> impl Strategy<Value = Table> {
    (1usize..4, 0usize..8).prop_flat_map(|(width, height)| {
        proptest::collection::vec(proptest::collection::vec(cell(), width), height).prop_map(
            move |rows| {
                let columns = (0..width).map(|i| format!("c{i}")).collect();
                Table::new(columns, rows).expect("generated rows match width")
            },
        )
    })
}

proptest! {
    #[test]
    fn classification_matches_values(t in arb_table()) {
        for (index, (_, kind)) in classify_columns(&t).into_iter().enumerate() {
            let present: Vec<&str> = t.column_values(index).filter(|v| !is_missing(v)).collect();
            match kind {
                ColumnType::Numeric => {
                    prop_assert!(!present.is_empty());
                    prop_assert!(present.iter().all(|v| is_decimal_literal(v)));
                }
                ColumnType::NotNumeric => {
                    prop_assert!(present.iter().any(|v| !is_decimal_literal(v)));
                }
                ColumnType::Indeterminate => prop_assert!(present.is_empty()),
            }
        }
    }

    #[test]
    fn change_with_same_value_is_identity(t in arb_table(), value in cell()) {
        let mut edited = t.clone();
        change_values(&mut edited, &ColumnTarget::All, &value, &value).unwrap();
        prop_assert_eq!(edited, t);
    }

    #[test]
    fn imputation_is_idempotent(t in arb_table()) {
        let mut once = t.clone();
        if impute_missing(&mut once).is_ok() {
            prop_assert!(once.rows().iter().flatten().all(|v| !is_missing(v)));
            let mut twice = once.clone();
            impute_missing(&mut twice).unwrap();
            prop_assert_eq!(twice, once);
        }
    }
}
