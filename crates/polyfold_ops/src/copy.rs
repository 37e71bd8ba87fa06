//! Shallow copy and JSON-based deep clone.

use polyfold_foundation::{Value, try_json_round_trip};

/// Returns a shallow copy: a new top-level container whose children are
/// shared with `data`. Non-containers are returned as-is.
#[must_use]
pub fn copy(data: &Value) -> Value {
    match data {
        Value::Seq(items) => Value::Seq(items.clone()),
        Value::Map(entries) => Value::Map(entries.detached()),
        other => other.clone(),
    }
}

/// Returns a fully independent duplicate of `data` by a JSON round trip.
///
/// The round trip is lossy: functions and `undefined` entries disappear
/// from mappings and become `null` in sequences, non-finite floats become
/// `null`. Nil passes through unchanged and a bare function yields
/// `undefined`. Nesting depth is preserved however deep it goes.
#[must_use]
pub fn deep_clone(data: &Value) -> Value {
    if data.is_nil() {
        return data.clone();
    }
    try_json_round_trip(data).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "deep_clone: no JSON form");
        Value::Undefined
    })
}
