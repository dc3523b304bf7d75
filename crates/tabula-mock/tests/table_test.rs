//! MockTable read/write protocol.

use tabula_core::errors::TableError;
use tabula_core::traits::Table;
use tabula_core::types::*;
use tabula_mock::MockTable;

fn people() -> MockTable {
    let schema = Schema::new(vec![
        Attribute::required("id", DataType::Integer),
        Attribute::required("name", DataType::String),
        Attribute::optional("nickname", DataType::String),
    ])
    .unwrap();
    MockTable::with_schema("people", schema)
}

fn assert_lengths(table: &MockTable, n: usize) {
    assert_eq!(table.row_count(), n);
    assert!(table.column_lengths().iter().all(|&len| len == n));
}

#[test]
fn worked_example() {
    let mut table = people();

    table
        .set(&[Assignment::new("id", 1), Assignment::new("name", "Ann")])
        .unwrap();
    assert_eq!(table.column("nickname").unwrap(), &[None]);

    let err = table.set(&[Assignment::new("id", 2)]).unwrap_err();
    assert_eq!(
        err,
        TableError::MissingRequiredValue {
            table: "people".into(),
            columns: vec!["name".into()],
        }
    );
    assert_lengths(&table, 1);

    assert_eq!(
        table.get(&"id".into()).unwrap(),
        Selection::Column(vec![Some(Value::Integer(1))])
    );
}

#[test]
fn multi_column_get_follows_selector_order() {
    let mut table = people();
    table
        .set(&[
            Assignment::new("id", 1),
            ("name", "Ann").into(),
            ("nickname", "Annie").into(),
        ])
        .unwrap();
    table
        .set(&[Assignment::new("name", "Bob"), ("id", 2).into()])
        .unwrap();

    let selection = table.get(&vec!["nickname", "id"].into()).unwrap();
    assert_eq!(
        selection,
        Selection::Columns(vec![
            vec![Some(Value::String("Annie".into())), None],
            vec![Some(Value::Integer(1)), Some(Value::Integer(2))],
        ])
    );
}

#[test]
fn attribute_selector_reads_column() {
    let mut table = people();
    table
        .set(&[Assignment::new("id", 5), ("name", "Eve").into()])
        .unwrap();
    let attr = table.schema().attribute("name").unwrap().clone();
    assert_eq!(
        table.get(&Expression::attribute(attr)).unwrap(),
        Selection::Column(vec![Some(Value::String("Eve".into()))])
    );
}

#[test]
fn get_unknown_column_fails() {
    let table = people();
    let err = table.get(&"age".into()).unwrap_err();
    assert!(matches!(err, TableError::UnknownColumn { ref column, .. } if column == "age"));

    let err = table.get(&vec!["id", "age"].into()).unwrap_err();
    assert!(matches!(err, TableError::UnknownColumn { ref column, .. } if column == "age"));
}

#[test]
fn get_with_empty_sequence_selects_no_columns() {
    let mut table = people();
    table
        .set(&[Assignment::new("id", 1), ("name", "Ann").into()])
        .unwrap();
    assert_eq!(
        table.get(&Expression::Sequence(vec![])).unwrap(),
        Selection::Columns(vec![])
    );
}

#[test]
fn get_with_nested_selector_is_unsupported() {
    let table = people();
    let nested = Expression::Sequence(vec![Expression::columns(["id", "name"])]);
    assert!(matches!(
        table.get(&nested),
        Err(TableError::UnsupportedSelector { .. })
    ));
}

#[test]
fn get_on_empty_table_returns_empty_sequences() {
    let table = people();
    assert_eq!(table.get(&"id".into()).unwrap(), Selection::Column(vec![]));
}

#[test]
fn set_unknown_column_fails() {
    let mut table = people();
    let err = table
        .set(&[
            Assignment::new("id", 1),
            ("name", "Ann").into(),
            ("age", 3).into(),
        ])
        .unwrap_err();
    assert!(matches!(err, TableError::UnknownColumn { ref column, .. } if column == "age"));
    assert_lengths(&table, 0);
}

#[test]
fn set_duplicate_column_fails() {
    let mut table = people();
    let err = table
        .set(&[
            Assignment::new("id", 1),
            ("name", "Ann").into(),
            ("id", 2).into(),
        ])
        .unwrap_err();
    assert!(matches!(err, TableError::DuplicateColumn { ref column, .. } if column == "id"));
    assert_lengths(&table, 0);
}

#[test]
fn set_type_mismatch_names_types_and_leaves_table_unchanged() {
    let mut table = people();
    table
        .set(&[Assignment::new("id", 1), ("name", "Ann").into()])
        .unwrap();

    let err = table
        .set(&[Assignment::new("id", "two"), ("name", "Bob").into()])
        .unwrap_err();
    assert_eq!(
        err,
        TableError::TypeMismatch {
            table: "people".into(),
            column: "id".into(),
            expected: DataType::Integer,
            actual: DataType::String,
        }
    );
    assert_lengths(&table, 1);
}

#[test]
fn set_reports_all_missing_required_columns_sorted() {
    let schema = Schema::new(vec![
        Attribute::required("b", DataType::Integer),
        Attribute::required("a", DataType::Integer),
        Attribute::optional("c", DataType::Integer),
    ])
    .unwrap();
    let mut table = MockTable::with_schema("pairs", schema);

    let err = table.set(&[Assignment::new("c", 1)]).unwrap_err();
    assert_eq!(
        err,
        TableError::MissingRequiredValue {
            table: "pairs".into(),
            columns: vec!["a".into(), "b".into()],
        }
    );
    assert_lengths(&table, 0);
}

#[test]
fn explicit_absent_for_required_column_fails() {
    let mut table = people();
    let err = table
        .set(&[Assignment::absent("name"), ("id", 1).into()])
        .unwrap_err();
    assert!(
        matches!(err, TableError::MissingRequiredValue { ref columns, .. } if columns == &["name"])
    );
    assert_lengths(&table, 0);
}

#[test]
fn explicit_absent_for_optional_column_stores_marker() {
    let mut table = people();
    table
        .set(&[
            Assignment::new("id", 1),
            ("name", "Ann").into(),
            Assignment::absent("nickname"),
        ])
        .unwrap();
    assert_eq!(table.column("nickname").unwrap(), &[None]);
}

#[test]
fn zero_and_empty_string_are_real_values() {
    let mut table = people();
    table
        .set(&[Assignment::new("id", 0), ("name", "").into()])
        .unwrap();
    assert_eq!(table.column("id").unwrap(), &[Some(Value::Integer(0))]);
    assert_eq!(
        table.column("name").unwrap(),
        &[Some(Value::String(String::new()))]
    );
}
