//! Path-based reads and writes.
//!
//! [`get`] walks a normalized route and stops at the first nil. [`set`],
//! [`update`] and [`set_unsafe`] share one write algorithm parameterized by
//! [`WriteMode`]:
//!
//! - `CopyOnWrite` duplicates every container along the route before writing
//!   into it. Containers off the route stay shared with the input.
//! - `InPlace` writes straight through the caller's `&mut Value`.
//!
//! A route into a nil slot creates a mapping at that level, numeric keys
//! included. Sequences are only grown when they already exist.

use polyfold_foundation::{Key, Path, Value};

use crate::copy::copy;
use crate::rank::or;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WriteMode {
    CopyOnWrite,
    InPlace,
}

/// Reads the value at `path`, or `not_found` if any step is nil.
///
/// A nil `data` short-circuits to `not_found`, and so does a route ending on
/// a stored `null`. The empty path returns `data` itself.
#[must_use]
pub fn get(data: &Value, path: impl Into<Value>, not_found: Value) -> Value {
    let path = Path::normalize(&path.into());
    lookup(data, path.keys()).cloned().unwrap_or(not_found)
}

fn lookup<'a>(data: &'a Value, keys: &[Key]) -> Option<&'a Value> {
    if data.is_nil() {
        return None;
    }
    match keys.split_first() {
        None => Some(data),
        Some((head, tail)) => child(data, head).and_then(|next| lookup(next, tail)),
    }
}

fn child<'a>(data: &'a Value, key: &Key) -> Option<&'a Value> {
    match data {
        Value::Seq(items) => key.as_index().and_then(|index| items.get(index)),
        Value::Map(entries) => entries.get(&key.as_name()),
        _ => None,
    }
}

/// Returns a copy of `data` with `new_value` written at `path`.
///
/// If `new_value` is a function it receives the current value at `path`
/// and its result is written instead. An empty path replaces the whole
/// value. `data` is never modified.
#[must_use]
pub fn set(data: &Value, path: impl Into<Value>, new_value: Value) -> Value {
    let mut result = data.clone();
    let path = Path::normalize(&path.into());
    write(
        &mut result,
        path.keys(),
        &mut |current| resolve(&new_value, current),
        WriteMode::CopyOnWrite,
    );
    result
}

/// Returns a copy of `data` with the value at `path` replaced by
/// `apply(current)`.
#[must_use]
pub fn update(
    data: &Value,
    path: impl Into<Value>,
    mut apply: impl FnMut(&Value) -> Value,
) -> Value {
    let mut result = data.clone();
    let path = Path::normalize(&path.into());
    write(&mut result, path.keys(), &mut apply, WriteMode::CopyOnWrite);
    result
}

/// Writes `new_value` at `path` directly into `data`.
///
/// Same semantics as [`set`], without the copies: callers that need the
/// previous state must [`copy`] first.
pub fn set_unsafe(data: &mut Value, path: impl Into<Value>, new_value: Value) {
    let path = Path::normalize(&path.into());
    write(
        data,
        path.keys(),
        &mut |current| resolve(&new_value, current),
        WriteMode::InPlace,
    );
}

/// Widest run of `undefined` holes one index write may open past the end
/// of a sequence. Writes further out are dropped.
const MAX_HOLES: usize = 1024;

fn resolve(new_value: &Value, current: &Value) -> Value {
    match new_value {
        Value::Fn(f) => f.call(std::slice::from_ref(current)),
        other => other.clone(),
    }
}

fn write(
    slot: &mut Value,
    keys: &[Key],
    leaf: &mut dyn FnMut(&Value) -> Value,
    mode: WriteMode,
) {
    if mode == WriteMode::CopyOnWrite {
        *slot = copy(slot);
    }

    let Some((head, tail)) = keys.split_first() else {
        *slot = leaf(slot);
        return;
    };

    tracing::trace!(key = %head, remaining = tail.len(), ?mode, "path write");

    if matches!(slot, Value::Undefined | Value::Null | Value::Bool(false)) {
        *slot = or([std::mem::take(slot), Value::empty_map()]);
    }

    match slot {
        Value::Map(entries) => write(entries.slot(&head.as_name()), tail, leaf, mode),
        Value::Seq(items) => match head.as_index() {
            Some(index) if index.saturating_sub(items.len()) <= MAX_HOLES => {
                write(items.slot(index), tail, leaf, mode);
            }
            Some(index) => tracing::debug!(
                index,
                len = items.len(),
                "index too far past the end of a sequence, write dropped"
            ),
            None => tracing::debug!(key = %head, "non-index key on a sequence, write dropped"),
        },
        other => tracing::debug!(key = %head, kind = %other.kind(), "cannot write into a scalar, write dropped"),
    }
}
