//! Emptiness ranking and the `or` value selector.

use polyfold_foundation::Value;

/// How "defined" a value is, from least to most preferred.
///
/// Ordering is what matters: `true` outranks a populated container, an
/// empty container outranks `false`, and `0`/`""` sit between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Never set.
    Undefined,
    /// Explicitly empty.
    Null,
    /// Boolean `false`.
    False,
    /// A sequence or mapping with no entries.
    EmptyContainer,
    /// Any other falsy value (`0`, `0.0`, `NaN`, `""`).
    Falsy,
    /// Boolean `true`.
    True,
    /// Everything else.
    Filled,
}

impl Rank {
    /// Ranks a value. First matching category wins.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Undefined => Self::Undefined,
            Value::Null => Self::Null,
            Value::Bool(false) => Self::False,
            Value::Seq(items) if items.is_empty() => Self::EmptyContainer,
            Value::Map(entries) if entries.is_empty() => Self::EmptyContainer,
            Value::Bool(true) => Self::True,
            other if !other.is_truthy() => Self::Falsy,
            _ => Self::Filled,
        }
    }
}

/// Returns the highest-ranked candidate; ties keep the earliest.
///
/// No candidates at all yields `Undefined`.
///
/// ```
/// use polyfold_foundation::Value;
/// use polyfold_ops::or;
///
/// let fallback = or([Value::Null, Value::empty_seq()]);
/// assert_eq!(fallback, Value::empty_seq());
/// ```
pub fn or<I>(candidates: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    let mut best: Option<(Rank, Value)> = None;
    for candidate in candidates {
        let rank = Rank::of(&candidate);
        if best.as_ref().is_none_or(|(top, _)| rank > *top) {
            best = Some((rank, candidate));
        }
    }
    best.map_or(Value::Undefined, |(_, value)| value)
}
