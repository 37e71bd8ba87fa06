//! Core value type for all Polyfold data.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::collections::{Mapping, Sequence};
use crate::error::{Error, ErrorContext, Result};
use crate::json;
use crate::kind::Kind;

/// Core value type for all Polyfold data.
///
/// Values are cheaply cloneable (O(1) for every variant). Containers use
/// copy-on-write storage, so a clone shares structure with the original
/// until one of them is written.
#[derive(Clone, Default)]
pub enum Value {
    /// Never set.
    #[default]
    Undefined,
    /// Explicitly empty.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Text value.
    String(Arc<str>),
    /// Ordered, index-addressed container.
    Seq(Sequence),
    /// Insertion-ordered keyed container.
    Map(Mapping),
    /// Function value.
    Fn(Callable),
}

type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A function stored inside a [`Value`].
///
/// Callables are compared by identity and have no JSON representation.
#[derive(Clone)]
pub struct Callable {
    name: Arc<str>,
    func: Arc<NativeFn>,
}

impl Callable {
    /// Wraps a closure taking the full argument list.
    pub fn new(
        name: impl Into<Arc<str>>,
        func: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Wraps a closure that only looks at its first argument.
    ///
    /// A missing argument is passed as [`Value::Undefined`].
    pub fn unary(
        name: impl Into<Arc<str>>,
        func: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self::new(name, move |args| {
            func(args.first().unwrap_or(&Value::Undefined))
        })
    }

    /// Returns the diagnostic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the function.
    #[must_use]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    /// Returns true if both handles refer to the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
            Self::Seq(_) => Kind::Seq,
            Self::Map(_) => Kind::Map,
            Self::Fn(_) => Kind::Fn,
        }
    }

    /// Creates a function value from a closure.
    pub fn func(
        name: impl Into<Arc<str>>,
        func: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self::Fn(Callable::new(name, func))
    }

    /// Creates an empty mapping value.
    #[must_use]
    pub fn empty_map() -> Self {
        Self::Map(Mapping::new())
    }

    /// Creates an empty sequence value.
    #[must_use]
    pub fn empty_seq() -> Self {
        Self::Seq(Sequence::new())
    }

    /// Returns true for `Undefined` and `Null`.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns true if this value is a function.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Fn(_))
    }

    /// Returns true if this value is a sequence.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// Returns true if this value is a mapping.
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns true for sequences and mappings.
    #[must_use]
    pub const fn is_iterable(&self) -> bool {
        self.kind().is_container()
    }

    /// Returns true if this value is truthy.
    ///
    /// The falsy values are `undefined`, `null`, `false`, `0`, `0.0`, `NaN`
    /// and the empty string. Empty containers are truthy.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Seq(_) | Self::Map(_) | Self::Fn(_) => true,
        }
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a number as f64 (converts int to float).
    ///
    /// Note: Converting large i64 values to f64 may lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a sequence reference.
    #[must_use]
    pub const fn as_seq(&self) -> Option<&Sequence> {
        match self {
            Self::Seq(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a mapping reference.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Mapping> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a function reference.
    #[must_use]
    pub const fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Fn(f) => Some(f),
            _ => None,
        }
    }

    /// Invokes this value as a function.
    ///
    /// # Errors
    ///
    /// Returns `NotCallable` if this value is not a function.
    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        match self {
            Self::Fn(f) => Ok(f.call(args)),
            other => Err(Error::not_callable(other.kind())
                .with_context(ErrorContext::new().with_operation("invoke"))),
        }
    }

    /// Returns true if both values are containers sharing the same storage.
    ///
    /// Mappings and functions answer exactly. Small sequences are stored
    /// inline by `im` and may report `false` even when cloned from each other.
    #[must_use]
    pub fn shares_storage(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Seq(a), Self::Seq(b)) => a.ptr_eq(b),
            (Self::Map(a), Self::Map(b)) => a.ptr_eq(b),
            (Self::Fn(a), Self::Fn(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Structural equality as seen through the JSON representation.
    ///
    /// Integers and floats compare numerically and entry order does not
    /// matter. Mapping entries whose values cannot be serialized are
    /// ignored. Inside a container, anything that serializes as `null`
    /// (`undefined`, functions, non-finite floats) equals `null`.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn deep_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => *a as f64 == *b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.nested_eq(y))
            }
            (Self::Map(a), Self::Map(b)) => {
                let present = |m: &Mapping| {
                    m.iter()
                        .filter(|(_, v)| v.kind().is_serializable())
                        .count()
                };
                present(a) == present(b)
                    && a.iter()
                        .filter(|(_, v)| v.kind().is_serializable())
                        .all(|(k, v)| b.get(k).is_some_and(|w| v.nested_eq(w)))
            }
            _ => self == other,
        }
    }

    fn nested_eq(&self, other: &Self) -> bool {
        (self.is_json_null() && other.is_json_null()) || self.deep_eq(other)
    }

    fn is_json_null(&self) -> bool {
        match self {
            Self::Undefined | Self::Null | Self::Fn(_) => true,
            Self::Float(n) => !n.is_finite(),
            _ => false,
        }
    }

    /// A total ordering suitable as a default sort comparator.
    ///
    /// Values of different kinds order by kind; numbers compare numerically
    /// across `Int` and `Float`; sequences compare lexicographically.
    #[must_use]
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Seq(a), Self::Seq(b)) => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| x.sort_cmp(y))
                .find(|ord| ord.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.sort_class().cmp(&b.sort_class()),
            },
        }
    }

    const fn sort_class(&self) -> u8 {
        match self {
            Self::Undefined => 0,
            Self::Null => 1,
            Self::Bool(_) => 2,
            Self::Int(_) | Self::Float(_) => 3,
            Self::String(_) => 4,
            Self::Seq(_) => 5,
            Self::Map(_) => 6,
            Self::Fn(_) => 7,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Fn(a), Self::Fn(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Seq(s) => write!(f, "{s:?}"),
            Self::Map(m) => write!(f, "{m:?}"),
            Self::Fn(func) => write!(f, "{func:?}"),
        }
    }
}

/// Text form used when a value becomes a mapping key.
///
/// Strings render raw, containers render as compact JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Seq(_) | Self::Map(_) => {
                let text = json::to_json(self, json::Indent::Compact).unwrap_or_default();
                f.write_str(&text)
            }
            Self::Fn(func) => write!(f, "{func}"),
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name)
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_possible_wrap)]
    fn from(n: usize) -> Self {
        Self::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Sequence> for Value {
    fn from(s: Sequence) -> Self {
        Self::Seq(s)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Self::Map(m)
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Self::Fn(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Undefined, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Arc<str>>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Value {
    fn from(entries: [(K, V); N]) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl TryFrom<Value> for Sequence {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Seq(s) => Ok(s),
            other => Err(Error::type_mismatch(Kind::Seq, other.kind())),
        }
    }
}

impl TryFrom<Value> for Mapping {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Map(m) => Ok(m),
            other => Err(Error::type_mismatch(Kind::Map, other.kind())),
        }
    }
}
