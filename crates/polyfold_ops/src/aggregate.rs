//! Whole-collection helpers built on iteration and ranking.

use std::cmp::Ordering;
use std::sync::Arc;

use polyfold_foundation::{Key, Mapping, Sequence, Value};

use crate::rank::or;

/// Shallow left-to-right merge into a fresh mapping.
///
/// Later sources overwrite earlier keys. Sequences contribute their
/// elements under index keys (`"0"`, `"1"`, ...); nil and scalar sources
/// contribute nothing.
///
/// If the last source is a function it becomes the combine step, see
/// [`merge_with`].
#[must_use]
pub fn merge(sources: &[Value]) -> Value {
    if let Some((Value::Fn(combine), rest)) = sources.split_last() {
        return merge_with(rest, |acc, next| combine.call(&[acc, next.clone()]));
    }
    Value::Map(sources.iter().fold(Mapping::new(), spread))
}

/// Folds `combine(acc, source)` over the sources.
///
/// The accumulator starts at the first source, or `{}` when that is nil.
/// Nil sources after the first are skipped.
pub fn merge_with(sources: &[Value], mut combine: impl FnMut(Value, &Value) -> Value) -> Value {
    let Some((first, rest)) = sources.split_first() else {
        return Value::empty_map();
    };
    rest.iter()
        .filter(|source| !source.is_nil())
        .fold(or([first.clone(), Value::empty_map()]), |acc, source| combine(acc, source))
}

fn spread(mut target: Mapping, source: &Value) -> Mapping {
    match source {
        Value::Map(entries) => {
            for (key, value) in entries {
                target.insert(Arc::clone(key), value.clone());
            }
        }
        Value::Seq(items) => {
            for (index, value) in items.iter().enumerate() {
                target.insert(index.to_string(), value.clone());
            }
        }
        _ => {}
    }
    target
}

/// Returns a sorted copy of `data`.
///
/// `compare` receives `(v1, v2, k1, k2)`; for sequences the keys are the
/// original indices. Mapping entries keep their key/value pairing and only
/// change order. The sort is stable. Non-containers are returned as-is.
#[must_use]
pub fn sort(data: &Value, mut compare: impl FnMut(&Value, &Value, &Key, &Key) -> Ordering) -> Value {
    match data {
        Value::Seq(items) => {
            let mut keyed: Vec<(Key, &Value)> = items
                .iter()
                .enumerate()
                .map(|(index, value)| (Key::from(index), value))
                .collect();
            keyed.sort_by(|(k1, v1), (k2, v2)| compare(*v1, *v2, k1, k2));
            Value::Seq(keyed.into_iter().map(|(_, value)| value.clone()).collect())
        }
        Value::Map(entries) => Value::Map(entries.sorted_by(|(k1, v1), (k2, v2)| {
            compare(v1, v2, &Key::Name(Arc::clone(k1)), &Key::Name(Arc::clone(k2)))
        })),
        other => other.clone(),
    }
}

/// Concatenates the arguments into one sequence.
///
/// Sequences are spliced in. Nil and `false` contribute nothing; any other
/// value is appended as a single element.
#[must_use]
pub fn concat(datas: &[Value]) -> Value {
    let mut out = Sequence::new();
    for data in datas {
        match or([data.clone(), Value::empty_seq()]) {
            Value::Seq(items) => out.append(items),
            single => out.push_back(single),
        }
    }
    Value::Seq(out)
}

/// Concatenates `data` with `more` and splits the result into chunks of `n`.
///
/// The last chunk may be shorter. `n == 0` yields an empty sequence.
#[must_use]
pub fn partition(data: &Value, n: usize, more: &[Value]) -> Value {
    if n == 0 {
        return Value::empty_seq();
    }
    let all: Vec<Value> = std::iter::once(data)
        .chain(more)
        .flat_map(|part| match concat(std::slice::from_ref(part)) {
            Value::Seq(items) => items,
            _ => Sequence::new(),
        })
        .collect();
    Value::Seq(
        all.chunks(n)
            .map(|chunk| Value::Seq(chunk.iter().cloned().collect()))
            .collect(),
    )
}

/// Reads a flat `key, value, key, value, ...` list as pairs.
#[must_use]
pub fn to_pairs(datas: &[Value]) -> Value {
    partition(&concat(datas), 2, &[])
}

/// Returns `[0, 1, ..., n - 1]`.
#[must_use]
pub fn range(n: usize) -> Value {
    Value::Seq((0..n).map(Value::from).collect())
}
