//! Sequence helpers and container introspection.

use polyfold_foundation::{Sequence, Value};

use crate::rank::or;

/// Returns `data` with `values` prepended, in argument order.
///
/// A nil base becomes a new sequence; any other non-sequence is returned
/// unchanged.
#[must_use]
pub fn push_first(data: &Value, values: &[Value]) -> Value {
    let mut result = data.clone();
    push_first_unsafe(&mut result, values);
    result
}

/// In-place form of [`push_first`].
pub fn push_first_unsafe(data: &mut Value, values: &[Value]) {
    if let Some(items) = as_growable(data) {
        for value in values.iter().rev() {
            items.push_front(value.clone());
        }
    }
}

/// Returns `data` with `values` appended.
///
/// A nil base becomes a new sequence; any other non-sequence is returned
/// unchanged.
#[must_use]
pub fn push_last(data: &Value, values: &[Value]) -> Value {
    let mut result = data.clone();
    push_last_unsafe(&mut result, values);
    result
}

/// In-place form of [`push_last`].
pub fn push_last_unsafe(data: &mut Value, values: &[Value]) {
    if let Some(items) = as_growable(data) {
        items.extend(values.iter().cloned());
    }
}

fn as_growable(data: &mut Value) -> Option<&mut Sequence> {
    if data.is_nil() {
        *data = or([std::mem::take(data), Value::empty_seq()]);
    }
    match data {
        Value::Seq(items) => Some(items),
        other => {
            tracing::debug!(kind = %other.kind(), "push into a non-sequence ignored");
            None
        }
    }
}

/// Splits off the first element: `(head, rest)`.
///
/// Empty and non-sequence inputs yield `(undefined, [])`.
#[must_use]
pub fn pop_first(data: &Value) -> (Value, Value) {
    let mut rest = data.as_seq().cloned().unwrap_or_default();
    let head = rest.pop_front().unwrap_or_default();
    (head, Value::Seq(rest))
}

/// Splits off the last element: `(last, body)`.
///
/// Empty and non-sequence inputs yield `(undefined, [])`.
#[must_use]
pub fn pop_last(data: &Value) -> (Value, Value) {
    let mut body = data.as_seq().cloned().unwrap_or_default();
    let last = body.pop_back().unwrap_or_default();
    (last, Value::Seq(body))
}

/// Keys of a container: indices for sequences, names for mappings.
#[must_use]
pub fn keys(data: &Value) -> Value {
    match data {
        Value::Seq(items) => Value::Seq((0..items.len()).map(Value::from).collect()),
        Value::Map(entries) => Value::Seq(entries.keys().cloned().map(Value::String).collect()),
        _ => Value::empty_seq(),
    }
}

/// Values of a container, in iteration order.
#[must_use]
pub fn values(data: &Value) -> Value {
    match data {
        Value::Seq(items) => Value::Seq(items.clone()),
        Value::Map(entries) => Value::Seq(entries.values().cloned().collect()),
        _ => Value::empty_seq(),
    }
}

/// `[key, value]` pairs of a container, in iteration order.
#[must_use]
pub fn entries(data: &Value) -> Value {
    let pair = |key: Value, value: &Value| Value::Seq([key, value.clone()].into_iter().collect());
    match data {
        Value::Seq(items) => Value::Seq(
            items
                .iter()
                .enumerate()
                .map(|(index, value)| pair(Value::from(index), value))
                .collect(),
        ),
        Value::Map(map) => Value::Seq(
            map.iter()
                .map(|(key, value)| pair(Value::String(key.clone()), value))
                .collect(),
        ),
        _ => Value::empty_seq(),
    }
}

/// Number of entries in a container, `None` for anything else.
#[must_use]
pub fn size(data: &Value) -> Option<usize> {
    match data {
        Value::Seq(items) => Some(items.len()),
        Value::Map(entries) => Some(entries.len()),
        _ => None,
    }
}
