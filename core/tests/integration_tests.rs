//! Integration tests for the public ittools API
//!
//! These tests exercise the operations together through the crate root.

mod common;

use common::{create_hi_data, create_nested_value, empty_list};
use ittools_core::{
    ContainerKind, Exclude, Index2D, Stringcrementor, Value, ValueType, depth, depth_default,
    enum_to_2dix, group, is_empty, itrify, itrify_list, nestify, nestify_list, zip_split,
};
use tracing_test::traced_test;

#[test]
fn test_depth_examples() {
    let value = create_nested_value();
    assert_eq!(depth_default(&value), 3);
    assert_eq!(depth(&Value::from("hallo"), &Exclude::text()), 0);
    assert_eq!(depth(&value, &Exclude::text().with(ValueType::List)), 0);
}

#[test]
#[traced_test]
fn test_nestify_then_measure() {
    let nested = nestify_list(Value::list([1, 2, 3]), 3).unwrap();
    assert_eq!(depth_default(&nested), 3);
    assert_eq!(nested.to_string(), "[[[1, 2, 3]]]");
    assert!(logs_contain("wrapped value"));
}

#[test]
fn test_nestify_set_error_reaches_caller() {
    let err = nestify(Value::list([1, 2, 3]), 3, &ContainerKind::Set).unwrap_err();
    assert_eq!(err.to_string(), "unhashable type: 'list'");
}

#[test]
fn test_itrify_from_json() {
    let value = Value::from(serde_json::json!({"a": 1, "b": 2}));
    assert_eq!(itrify_list(value).unwrap(), Value::list(["a", "b"]));

    let text = itrify(Value::from("String"), &ContainerKind::Tuple).unwrap();
    assert_eq!(text.to_string(), "('String',)");
}

#[test]
fn test_is_empty_examples() {
    assert!(is_empty(&empty_list()));
    assert!(!is_empty(&Value::list([empty_list(), Value::list([1])])));
    assert!(is_empty(&Value::list([Value::list([Value::list([
        empty_list()
    ])])])));
    assert!(!is_empty(&Value::tuple(Vec::<Value>::new())));
}

#[test]
fn test_labels_for_nested_rows() {
    let labels = Stringcrementor::new("Category", 1);
    let rows: Vec<Value> = labels
        .zip(zip_split(&create_hi_data(), 3).unwrap())
        .map(|(label, group)| Value::tuple([Value::from(label), Value::list(group)]))
        .collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[2].to_string(),
        "('Category3', ['hi', 'hi', 'hi'])"
    );
    assert_eq!(depth_default(&Value::List(rows)), 3);
}

#[test]
#[traced_test]
fn test_group_into_grid() {
    let runs: Vec<Vec<Option<i64>>> = group((0..10_i64).collect::<Vec<_>>(), 3).unwrap().collect();
    let grid = Index2D::new((3, 4)).unwrap();

    for (i, cell) in runs.iter().flatten().enumerate() {
        let (row, column) = grid.index(i as i64).unwrap();
        assert_eq!(runs[row as usize][column as usize], *cell);
    }
    assert!(logs_contain("contiguous split"));
}

#[test]
fn test_invalid_arguments() {
    assert!(zip_split(&[1, 2, 3], 0).is_err());
    assert!(group(0..3, 0).is_err());
    assert!(enum_to_2dix(1, (1, 0)).is_err());
    assert!(Index2D::new((1, 0)).is_err());
}

#[test]
fn test_version() {
    assert!(!ittools_core::VERSION.is_empty());
}
