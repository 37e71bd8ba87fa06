//! Value-level branching: `when`, `match_value`, `try_catch`.
//!
//! Argument lists are flat `condition, value, condition, value, ...`
//! slices. A trailing unpaired element is the default.

use std::fmt::Display;

use polyfold_foundation::Value;

/// Returns the value paired with the first truthy condition.
///
/// A function condition is called with no arguments and its result tested
/// for truthiness. Without a match the trailing default is returned, or
/// `undefined` when there is none.
#[must_use]
pub fn when(clauses: &[Value]) -> Value {
    select(clauses, |condition| match condition {
        Value::Fn(f) => f.call(&[]).is_truthy(),
        other => other.is_truthy(),
    })
}

/// Returns the value paired with the first case matching `subject`.
///
/// A function case is called with `subject` and matches if its result is
/// truthy. Any other case matches when it is structurally equal to
/// `subject` (see [`Value::deep_eq`]).
#[must_use]
pub fn match_value(subject: &Value, cases: &[Value]) -> Value {
    select(cases, |case| match case {
        Value::Fn(f) => f.call(std::slice::from_ref(subject)).is_truthy(),
        other => other.deep_eq(subject),
    })
}

fn select(clauses: &[Value], mut hit: impl FnMut(&Value) -> bool) -> Value {
    let mut pairs = clauses.chunks_exact(2);
    for pair in pairs.by_ref() {
        match pair {
            [test, value] if hit(test) => return value.clone(),
            _ => {}
        }
    }
    pairs.remainder().first().cloned().unwrap_or_default()
}

/// Runs `attempt`, converting a failure into a value.
///
/// On failure, a function `fallback` is called with the error message and
/// its result returned; any other `fallback` is returned as-is. Pass
/// `Value::Undefined` for "no fallback".
pub fn try_catch<E: Display>(attempt: impl FnOnce() -> Result<Value, E>, fallback: Value) -> Value {
    try_catch_with(attempt, |err| match &fallback {
        Value::Fn(f) => f.call(&[Value::from(err.to_string())]),
        other => other.clone(),
    })
}

/// Runs `attempt`, handing any error to `recover`.
pub fn try_catch_with<E: Display>(
    attempt: impl FnOnce() -> Result<Value, E>,
    recover: impl FnOnce(E) -> Value,
) -> Value {
    match attempt() {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "try_catch recovering");
            recover(err)
        }
    }
}
