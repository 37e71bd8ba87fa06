//! Integration tests for polymorphic iteration

use polyfold::foundation::{Key, Value};
use polyfold::ops::{each, filter, map, reduce, transform};

fn add(acc: i64, value: &Value, _: &Key, _: &Value) -> i64 {
    acc + value.as_int().unwrap_or(0)
}

fn plus_one(value: &Value, _: &Key, _: &Value) -> Value {
    Value::from(value.as_int().unwrap_or(0) + 1)
}

fn at_least_two(value: &Value, _: &Key, _: &Value) -> bool {
    value.as_int().is_some_and(|n| n >= 2)
}

#[test]
fn reduce_on_sequences() {
    assert_eq!(reduce(&Value::from(vec![1, 2, 3]), add, 1), 7);
}

#[test]
fn reduce_on_mappings() {
    assert_eq!(reduce(&Value::from([("a", 1), ("b", 2), ("c", 3)]), add, 1), 7);
}

#[test]
fn reduce_ignores_nil() {
    assert_eq!(reduce(&Value::Null, add, 1), 1);
    assert_eq!(reduce(&Value::Undefined, add, 1), 1);
}

#[test]
fn transform_takes_initial_first() {
    assert_eq!(transform(1, &Value::from(vec![1, 2, 3]), add), 7);
    assert_eq!(transform(1, &Value::from([("a", 1), ("b", 2), ("c", 3)]), add), 7);
    assert_eq!(transform(1, &Value::Null, add), 1);
    assert_eq!(transform(1, &Value::Undefined, add), 1);
}

#[test]
fn transform_can_build_values() {
    let counts = transform(Value::empty_map(), &Value::from(vec!["a", "b", "a"]), |acc, v, _, _| {
        let key = v.as_str().unwrap_or_default().to_string();
        polyfold::ops::update(&acc, vec![key], |n| Value::from(n.as_int().unwrap_or(0) + 1))
    });
    assert_eq!(counts, Value::from([("a", 2), ("b", 1)]));
}

#[test]
fn map_on_sequences() {
    assert_eq!(map(&Value::from(vec![1, 2, 3]), plus_one), Value::from(vec![2, 3, 4]));
}

#[test]
fn map_on_mappings() {
    assert_eq!(
        map(&Value::from([("a", 1), ("b", 2), ("c", 3)]), plus_one),
        Value::from([("a", 2), ("b", 3), ("c", 4)])
    );
}

#[test]
fn map_on_mappings_stores_results_as_returned() {
    let data = Value::from([("", 1), ("b", 2)]);
    let result = map(&data, |value, _, _| Value::from(value.as_int().unwrap_or(0) * 10));
    assert_eq!(result, Value::from([("", 10), ("b", 20)]));

    let f = Value::func("f", |_| Value::from("called"));
    let stored = map(&Value::from([("a", 1)]), |_, _, _| f.clone());
    assert_eq!(stored, Value::from([("a", f)]));
}

#[test]
fn filter_on_mappings_keeps_empty_key() {
    let data = Value::from([("", 3), ("b", 1)]);
    assert_eq!(filter(&data, at_least_two), Value::from([("", 3)]));
}

#[test]
fn map_ignores_nil() {
    assert_eq!(map(&Value::Null, plus_one), Value::Null);
    assert_eq!(map(&Value::Undefined, plus_one), Value::Undefined);
}

#[test]
fn filter_on_sequences() {
    assert_eq!(filter(&Value::from(vec![1, 2, 3]), at_least_two), Value::from(vec![2, 3]));
}

#[test]
fn filter_on_mappings() {
    assert_eq!(
        filter(&Value::from([("a", 1), ("b", 2), ("c", 3)]), at_least_two),
        Value::from([("b", 2), ("c", 3)])
    );
}

#[test]
fn filter_ignores_nil() {
    assert_eq!(filter(&Value::Null, at_least_two), Value::Null);
    assert_eq!(filter(&Value::Undefined, at_least_two), Value::Undefined);
}

#[test]
fn each_on_sequences_passes_value_index_and_data() {
    let array = Value::from(vec!["a", "b"]);
    let mut calls = Vec::new();
    each(&array, |v, k, d| calls.push((v.clone(), k.clone(), d.clone())));
    assert_eq!(
        calls,
        vec![
            (Value::from("a"), Key::Index(0), array.clone()),
            (Value::from("b"), Key::Index(1), array.clone()),
        ]
    );
}

#[test]
fn each_on_mappings_passes_value_key_and_data() {
    let object = Value::from([("a", 1), ("b", 2)]);
    let mut calls = Vec::new();
    each(&object, |v, k, d| calls.push((v.clone(), k.clone(), d.clone())));
    assert_eq!(
        calls,
        vec![
            (Value::from(1), Key::from("a"), object.clone()),
            (Value::from(2), Key::from("b"), object.clone()),
        ]
    );
}

#[test]
fn each_ignores_nil() {
    let mut called = false;
    each(&Value::Null, |_, _, _| called = true);
    each(&Value::Undefined, |_, _, _| called = true);
    assert!(!called);
}
