//! Helpers for working with function values.
//!
//! These operate on [`Value::Fn`] so that pipelines can be assembled from
//! data. A value that is not a function where one is expected is skipped
//! (or yields `undefined`) and logged at `debug`.

use polyfold_foundation::{Callable, Indent, Value, to_json};

use crate::path::get;

/// Runs `f` on `data` for its side effect and returns `data`.
pub fn tap(mut data: Value, f: impl FnOnce(&mut Value)) -> Value {
    f(&mut data);
    data
}

/// Calls the function `f` with `values` as its argument list.
#[must_use]
pub fn using(values: &[Value], f: &Value) -> Value {
    f.invoke(values).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "using: not a function");
        Value::Undefined
    })
}

/// Partially applies `f`: the result takes the data argument first and
/// appends `args`.
///
/// `defer(f, [a, b])` called with `x` calls `f(x, a, b)`. A non-function
/// `f` yields `undefined`.
#[must_use]
pub fn defer(f: &Value, args: &[Value]) -> Value {
    let Value::Fn(target) = f else {
        tracing::debug!(kind = %f.kind(), "defer: not a function");
        return Value::Undefined;
    };
    let target = target.clone();
    let bound = args.to_vec();
    Value::Fn(Callable::new(format!("defer({})", target.name()), move |call_args| {
        let data = call_args.first().cloned().unwrap_or_default();
        let full: Vec<Value> = std::iter::once(data).chain(bound.iter().cloned()).collect();
        target.call(&full)
    }))
}

/// Threads `data` through `fns` left to right.
#[must_use]
pub fn pipe(data: Value, fns: &[Value]) -> Value {
    fns.iter().fold(data, |acc, f| match f {
        Value::Fn(f) => f.call(&[acc]),
        other => {
            tracing::debug!(kind = %other.kind(), "pipe: skipping non-function step");
            acc
        }
    })
}

/// Calls the function stored under `name` in `data`, passing `data` first.
///
/// A missing or non-function member yields `undefined`.
#[must_use]
pub fn call(data: &Value, name: impl Into<Value>, args: &[Value]) -> Value {
    match get(data, name, Value::Undefined) {
        Value::Fn(method) => {
            let full: Vec<Value> = std::iter::once(data.clone()).chain(args.iter().cloned()).collect();
            method.call(&full)
        }
        _ => Value::Undefined,
    }
}

/// Logs `data` as compact JSON at `info` level and returns it.
pub fn log(data: Value, label: &str) -> Value {
    let text = to_json(&data, Indent::Compact);
    tracing::info!(label, json = text.as_deref().unwrap_or("undefined"), "log");
    data
}
