//! Integration tests for the JSON boundary
//!
//! Tests serialization layout, lossy values, and recovering parse.

use polyfold::foundation::{Indent, Value, parse_json, to_json, try_parse_json};

#[test]
fn to_json_compact_and_pretty() {
    let data = Value::from([("a", Value::from(1)), ("b", Value::from(vec![true]))]);

    assert_eq!(to_json(&data, false).as_deref(), Some(r#"{"a":1,"b":[true]}"#));
    assert_eq!(
        to_json(&data, true).as_deref(),
        Some("{\n  \"a\": 1,\n  \"b\": [\n    true\n  ]\n}")
    );
    assert_eq!(
        to_json(&data, 3usize).as_deref(),
        Some("{\n   \"a\": 1,\n   \"b\": [\n      true\n   ]\n}")
    );
}

#[test]
fn indent_conversions() {
    assert_eq!(Indent::from(false), Indent::Compact);
    assert_eq!(Indent::from(true), Indent::Spaces(2));
    assert_eq!(Indent::from(0usize), Indent::Compact);
    assert_eq!(Indent::from(4usize), Indent::Spaces(4));
}

#[test]
fn to_json_preserves_insertion_order() {
    let data = Value::from([("z", 1), ("a", 2), ("m", 3)]);
    assert_eq!(to_json(&data, false).as_deref(), Some(r#"{"z":1,"a":2,"m":3}"#));
}

#[test]
fn to_json_of_scalars() {
    assert_eq!(to_json(&Value::from("s"), false).as_deref(), Some(r#""s""#));
    assert_eq!(to_json(&Value::Float(2.5), false).as_deref(), Some("2.5"));
    assert_eq!(to_json(&Value::Undefined, false), None);
}

#[test]
fn parse_json_valid_text() {
    let parsed = parse_json(&Value::from(r#"{"a":[1,2.5,"x",null]}"#), Value::empty_map());
    assert_eq!(
        parsed,
        Value::from([(
            "a",
            Value::from(vec![Value::from(1), Value::from(2.5), Value::from("x"), Value::Null])
        )])
    );
}

#[test]
fn parse_json_invalid_text_uses_default() {
    assert_eq!(parse_json(&Value::from("{invalid}"), Value::empty_map()), Value::empty_map());
    assert_eq!(parse_json(&Value::from(""), Value::from("d")), Value::from("d"));
}

#[test]
fn parse_json_nil_passes_through() {
    assert_eq!(parse_json(&Value::Null, Value::empty_map()), Value::Null);
    assert_eq!(parse_json(&Value::Undefined, Value::empty_map()), Value::Undefined);
}

#[test]
fn parse_json_non_text_inputs() {
    assert_eq!(parse_json(&Value::Bool(true), Value::Null), Value::Bool(true));
    assert_eq!(parse_json(&Value::from(12), Value::Null), Value::from(12));
    assert_eq!(parse_json(&Value::from(vec![1]), Value::from("d")), Value::from("d"));
}

#[test]
fn try_parse_json_round_trip() {
    let text = r#"{"users":[{"name":"Jane","tags":[]},{"name":"Fred","tags":["x"]}]}"#;
    let parsed = try_parse_json(text).unwrap();
    assert_eq!(to_json(&parsed, false).as_deref(), Some(text));
}
