//! Free-function type predicates.
//!
//! These mirror the [`Value`] methods so they can be passed directly where a
//! `fn(&Value) -> bool` is expected.

use polyfold_foundation::Value;

/// True for `Undefined` and `Null`.
#[must_use]
pub fn is_nil(data: &Value) -> bool {
    data.is_nil()
}

/// True for function values.
#[must_use]
pub fn is_callable(data: &Value) -> bool {
    data.is_callable()
}

/// True for sequences.
#[must_use]
pub fn is_sequence(data: &Value) -> bool {
    data.is_sequence()
}

/// True for mappings: not nil, not a sequence, not a function, and keyed.
#[must_use]
pub fn is_mapping(data: &Value) -> bool {
    data.is_mapping()
}

/// True for sequences and mappings.
#[must_use]
pub fn is_iterable(data: &Value) -> bool {
    data.is_iterable()
}
