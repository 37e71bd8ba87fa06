//! Shape-preserving iteration over sequences and mappings.
//!
//! Callbacks receive `(value, key, data)`. Sequence keys are
//! [`Key::Index`], mapping keys are [`Key::Name`]. Anything that is not a
//! container is treated as having no entries.

use std::sync::Arc;

use polyfold_foundation::{Key, Mapping, Sequence, Value};

/// Left fold over the entries of `data`.
///
/// Non-containers (nil included) run zero iterations and return `initial`.
pub fn reduce<A>(
    data: &Value,
    mut step: impl FnMut(A, &Value, &Key, &Value) -> A,
    initial: A,
) -> A {
    match data {
        Value::Seq(items) => items
            .iter()
            .enumerate()
            .fold(initial, |acc, (index, item)| step(acc, item, &Key::from(index), data)),
        Value::Map(entries) => entries.iter().fold(initial, |acc, (name, value)| {
            step(acc, value, &Key::Name(Arc::clone(name)), data)
        }),
        _ => initial,
    }
}

/// [`reduce`] with the accumulator first, for pipelines.
pub fn transform<A>(
    initial: A,
    data: &Value,
    step: impl FnMut(A, &Value, &Key, &Value) -> A,
) -> A {
    reduce(data, step, initial)
}

/// Applies `f` to every entry, keeping the shape of `data`.
///
/// A sequence maps element-wise; a mapping produces a fresh mapping with
/// the same keys in the same order. Anything else is returned unchanged.
///
/// Mapping results are stored as returned: a function result is kept as a
/// value rather than applied, and the empty key is an ordinary entry.
pub fn map(data: &Value, mut f: impl FnMut(&Value, &Key, &Value) -> Value) -> Value {
    match data {
        Value::Seq(_) => Value::Seq(transform(Sequence::new(), data, |mut acc, value, key, data| {
            acc.push_back(f(value, key, data));
            acc
        })),
        Value::Map(_) => Value::Map(transform(Mapping::new(), data, |mut acc, value, key, data| {
            acc.insert(key.as_name(), f(value, key, data));
            acc
        })),
        _ => data.clone(),
    }
}

/// Keeps the entries for which `keep` returns true, in their original order.
///
/// Non-containers are returned unchanged.
pub fn filter(data: &Value, mut keep: impl FnMut(&Value, &Key, &Value) -> bool) -> Value {
    match data {
        Value::Seq(_) => Value::Seq(transform(Sequence::new(), data, |mut acc, value, key, data| {
            if keep(value, key, data) {
                acc.push_back(value.clone());
            }
            acc
        })),
        Value::Map(_) => Value::Map(transform(Mapping::new(), data, |mut acc, value, key, data| {
            if keep(value, key, data) {
                acc.insert(key.as_name(), value.clone());
            }
            acc
        })),
        _ => data.clone(),
    }
}

/// Calls `f` for every entry in order.
pub fn each(data: &Value, mut f: impl FnMut(&Value, &Key, &Value)) {
    reduce(data, |(), value, key, data| f(value, key, data), ());
}
