//! Integration tests for merge and sort

use polyfold::foundation::Value;
use polyfold::ops::{entries, get, merge, merge_with, set, sort};

fn price(value: &Value) -> i64 {
    get(value, "price", Value::from(0)).as_int().unwrap_or(0)
}

// =============================================================================
// merge
// =============================================================================

#[test]
fn merges_mappings_together() {
    let old = Value::from([("a", 1)]);
    let new = merge(&[old.clone(), Value::from([("b", 2)])]);
    assert_eq!(new, Value::from([("a", 1), ("b", 2)]));
    assert_eq!(old, Value::from([("a", 1)]));
}

#[test]
fn merges_multiple_arguments() {
    let result = merge(&[Value::from([("a", 1)]), Value::from([("b", 2)]), Value::from([("c", 3)])]);
    assert_eq!(result, Value::from([("a", 1), ("b", 2), ("c", 3)]));
}

#[test]
fn merge_with_nil_first() {
    assert_eq!(merge(&[Value::Null, Value::from([("a", 1)])]), Value::from([("a", 1)]));
    assert_eq!(merge(&[Value::Undefined, Value::from([("a", 1)])]), Value::from([("a", 1)]));
}

#[test]
fn merge_with_nil_in_between() {
    let result = merge(&[Value::from([("a", 1)]), Value::Undefined, Value::Null, Value::from([("b", 2)])]);
    assert_eq!(result, Value::from([("a", 1), ("b", 2)]));
}

#[test]
fn merge_with_callback() {
    let o1 = Value::from([("a", 1), ("price", 1)]);
    let o2 = Value::from([("b", 2), ("price", 2)]);
    let o3 = Value::from([("c", 3), ("price", 3)]);

    let combine = Value::func("combine", |args| {
        let total = args.first().cloned().unwrap_or_default();
        let current = args.get(1).cloned().unwrap_or_default();
        let sum = price(&total) + price(&current);
        set(&merge(&[total, current]), "price", Value::from(sum))
    });

    let result = merge(&[o1.clone(), o2.clone(), o3.clone(), combine]);
    assert_eq!(result, Value::from([("a", 1), ("b", 2), ("c", 3), ("price", 6)]));

    assert_eq!(o1, Value::from([("a", 1), ("price", 1)]));
    assert_eq!(o2, Value::from([("b", 2), ("price", 2)]));
    assert_eq!(o3, Value::from([("c", 3), ("price", 3)]));
}

#[test]
fn merge_with_closure() {
    let result = merge_with(
        &[Value::from([("price", 1)]), Value::Null, Value::from([("price", 5)])],
        |acc, next| Value::from([("price", price(&acc) + price(next))]),
    );
    assert_eq!(result, Value::from([("price", 6)]));
}

// =============================================================================
// sort
// =============================================================================

#[test]
fn sort_sequence_leaves_original() {
    let data = Value::from(vec![5, 1, 4]);
    assert_eq!(sort(&data, |a, b, _, _| a.sort_cmp(b)), Value::from(vec![1, 4, 5]));
    assert_eq!(data, Value::from(vec![5, 1, 4]));
}

#[test]
fn sort_mapping_by_value_descending() {
    let data = Value::from([("a", 3), ("b", 7), ("c", 5)]);
    let sorted = sort(&data, |v1, v2, _, _| v2.sort_cmp(v1));

    assert_eq!(
        entries(&sorted),
        Value::from(vec![
            Value::from(vec![Value::from("b"), Value::from(7)]),
            Value::from(vec![Value::from("c"), Value::from(5)]),
            Value::from(vec![Value::from("a"), Value::from(3)]),
        ])
    );
    assert_eq!(
        entries(&data),
        Value::from(vec![
            Value::from(vec![Value::from("a"), Value::from(3)]),
            Value::from(vec![Value::from("b"), Value::from(7)]),
            Value::from(vec![Value::from("c"), Value::from(5)]),
        ])
    );
}

#[test]
fn sort_non_container_is_identity() {
    assert_eq!(sort(&Value::Null, |a, b, _, _| a.sort_cmp(b)), Value::Null);
}
