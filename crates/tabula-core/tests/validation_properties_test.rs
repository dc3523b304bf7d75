//! Property tests for row validation: every write either materializes one
//! cell per column or is rejected.

use proptest::prelude::*;

use tabula_core::types::*;
use tabula_core::validation::validate_row;

fn schema() -> Schema {
    Schema::new(vec![
        Attribute::required("id", DataType::Integer),
        Attribute::required("name", DataType::String),
        Attribute::optional("score", DataType::Float),
        Attribute::optional("active", DataType::Boolean),
    ])
    .unwrap()
}

fn value_strategy() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        any::<i64>().prop_map(|v| Some(Value::Integer(v))),
        (-1e6f64..1e6).prop_map(|v| Some(Value::Float(v))),
        "[a-z]{0,6}".prop_map(|v| Some(Value::String(v))),
        any::<bool>().prop_map(|v| Some(Value::Boolean(v))),
    ]
}

fn assignment_strategy() -> impl Strategy<Value = Assignment> {
    let column = prop_oneof![
        Just("id"),
        Just("name"),
        Just("score"),
        Just("active"),
        Just("ghost"),
    ];
    (column, value_strategy()).prop_map(|(column, value)| Assignment {
        column: column.to_string(),
        value,
    })
}

fn valid_row_strategy() -> impl Strategy<Value = Vec<Assignment>> {
    (
        any::<i64>(),
        "[a-z]{0,6}",
        proptest::option::of(-1e6f64..1e6),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(id, name, score, active)| {
            let mut row = vec![Assignment::new("name", name), Assignment::new("id", id)];
            if let Some(score) = score {
                row.push(Assignment::new("score", score));
            }
            if let Some(active) = active {
                row.push(Assignment::new("active", active));
            }
            row
        })
}

proptest! {
    #[test]
    fn ok_rows_cover_every_column(row in proptest::collection::vec(assignment_strategy(), 0..6)) {
        let schema = schema();
        if let Ok(cells) = validate_row("props", &schema, &row) {
            prop_assert_eq!(cells.len(), schema.len());
            for (attr, cell) in schema.iter().zip(&cells) {
                if attr.required {
                    prop_assert!(cell.is_some(), "required column {} left absent", attr.name);
                }
                if let Some(value) = cell {
                    prop_assert_eq!(value.data_type(), attr.data_type);
                }
            }
        }
    }

    #[test]
    fn valid_rows_land_in_schema_order(row in valid_row_strategy()) {
        let schema = schema();
        let cells = validate_row("props", &schema, &row).unwrap();
        prop_assert_eq!(cells.len(), schema.len());
        for assignment in &row {
            let position = schema.position(&assignment.column).unwrap();
            prop_assert_eq!(&cells[position], &assignment.value);
        }
    }

    #[test]
    fn unknown_column_is_always_rejected(
        mut row in proptest::collection::vec(assignment_strategy(), 0..6),
        at in 0usize..6,
    ) {
        let at = at.min(row.len());
        row.insert(at, Assignment::absent("ghost"));
        prop_assert!(validate_row("props", &schema(), &row).is_err());
    }
}
