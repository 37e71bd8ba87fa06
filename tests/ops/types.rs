//! Integration tests for type predicates

use polyfold::foundation::Value;
use polyfold::ops::{is_callable, is_iterable, is_mapping, is_nil, is_sequence};

fn samples() -> Vec<Value> {
    vec![
        Value::Null,
        Value::Undefined,
        Value::empty_seq(),
        Value::empty_map(),
        Value::from(vec![1, 2]),
        Value::from([("a", 1)]),
        Value::func("f", |_| Value::empty_seq()),
    ]
}

fn check(predicate: fn(&Value) -> bool, expected: [bool; 7]) {
    for (value, want) in samples().iter().zip(expected) {
        assert_eq!(predicate(value), want, "{value:?}");
    }
}

#[test]
fn checks_nil() {
    check(is_nil, [true, true, false, false, false, false, false]);
}

#[test]
fn checks_sequence() {
    check(is_sequence, [false, false, true, false, true, false, false]);
}

#[test]
fn checks_mapping() {
    check(is_mapping, [false, false, false, true, false, true, false]);
}

#[test]
fn checks_callable() {
    check(is_callable, [false, false, false, false, false, false, true]);
}

#[test]
fn checks_iterable() {
    check(is_iterable, [false, false, true, true, true, true, false]);
}

#[test]
fn scalars_are_not_containers() {
    for value in [Value::Bool(false), Value::Int(0), Value::from("{}")] {
        assert!(!is_nil(&value));
        assert!(!is_iterable(&value));
    }
}
