//! Integration tests for when, match_value and try_catch

use polyfold::foundation::{Error, Value, try_parse_json};
use polyfold::ops::{get, match_value, try_catch, try_catch_with, when};

fn grade(score: i64) -> Value {
    let at_least = |min: i64| Value::Bool(score >= min);
    when(&[
        at_least(90),
        Value::from("A"),
        at_least(80),
        Value::from("B"),
        at_least(70),
        Value::from("C"),
        Value::from("F"),
    ])
}

#[test]
fn when_returns_first_matching_branch() {
    assert_eq!(grade(95), Value::from("A"));
    assert_eq!(grade(85), Value::from("B"));
    assert_eq!(grade(70), Value::from("C"));
    assert_eq!(grade(12), Value::from("F"));
}

#[test]
fn when_treats_empty_containers_as_truthy() {
    assert_eq!(when(&[Value::empty_seq(), Value::from(1), Value::from(2)]), Value::from(1));
    assert_eq!(when(&[Value::from(""), Value::from(1), Value::from(0), Value::from(2)]), Value::Undefined);
}

#[test]
fn when_invokes_lazy_conditions() {
    let cond = Value::func("cond", |_| Value::from("yes"));
    assert_eq!(when(&[cond, Value::from("lazy")]), Value::from("lazy"));
}

#[test]
fn match_value_picks_equal_case() {
    let status = |code: i64| {
        match_value(
            &Value::from(code),
            &[
                Value::from(200),
                Value::from("ok"),
                Value::from(404),
                Value::from("missing"),
                Value::from("unknown"),
            ],
        )
    };
    assert_eq!(status(200), Value::from("ok"));
    assert_eq!(status(404), Value::from("missing"));
    assert_eq!(status(500), Value::from("unknown"));
}

#[test]
fn match_value_compares_structure() {
    let point = Value::from([("x", 1), ("y", 2)]);
    let result = match_value(
        &point,
        &[Value::from([("y", 2), ("x", 1)]), Value::from("origin-ish"), Value::from("elsewhere")],
    );
    assert_eq!(result, Value::from("origin-ish"));
}

#[test]
fn match_value_compares_serialized_nulls() {
    let subject = Value::from(vec![Value::Undefined, Value::from(1)]);
    let result = match_value(
        &subject,
        &[Value::from(vec![Value::Null, Value::from(1)]), Value::from("hit"), Value::from("miss")],
    );
    assert_eq!(result, Value::from("hit"));

    let result = match_value(
        &Value::from([("gone", Value::Undefined), ("n", Value::Float(f64::NAN))]),
        &[Value::from([("n", Value::Null)]), Value::from("hit"), Value::from("miss")],
    );
    assert_eq!(result, Value::from("hit"));
}

#[test]
fn match_value_with_predicate_cases() {
    let has_name = Value::func("has_name", |args| {
        Value::Bool(args.first().is_some_and(|v| !get(v, "name", Value::Null).is_nil()))
    });
    let cases = [has_name, Value::from("named"), Value::from("anonymous")];
    assert_eq!(match_value(&Value::from([("name", "Ada")]), &cases), Value::from("named"));
    assert_eq!(match_value(&Value::empty_map(), &cases), Value::from("anonymous"));
}

#[test]
fn try_catch_returns_attempt_result() {
    assert_eq!(try_catch(|| try_parse_json(r#"{"a":1}"#), Value::Null), Value::from([("a", 1)]));
}

#[test]
fn try_catch_falls_back_on_failure() {
    assert_eq!(try_catch(|| try_parse_json("nope"), Value::from(0)), Value::from(0));
}

#[test]
fn try_catch_hands_message_to_function() {
    let echo = Value::func("echo", |args| args.first().cloned().unwrap_or_default());
    let result = try_catch(|| Err::<Value, _>(Error::failed("disk full")), echo);
    assert_eq!(result, Value::from("failed: disk full"));
}

#[test]
fn try_catch_with_closure_recovery() {
    let result = try_catch_with(|| Value::Null.invoke(&[]), |err| Value::from(err.to_string()));
    assert!(result.as_str().is_some_and(|m| m.contains("null")));
}
