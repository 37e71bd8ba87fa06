//! Path segments and normalized routes.
//!
//! A path specification is any [`Value`]. [`Path::normalize`] turns it into
//! an ordered list of [`Key`]s:
//!
//! - the empty string is the empty route (identity access)
//! - a sequence contributes one key per element
//! - any other value is a one-element route
//!
//! `null` and `undefined` segments become the literal names `"null"` and
//! `"undefined"`; they are never treated as absent.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// One segment of a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Numeric segment.
    Index(i64),
    /// Textual segment.
    Name(Arc<str>),
}

impl Key {
    /// Converts a single path element into a key.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::float_cmp
    )]
    pub fn from_segment(segment: &Value) -> Self {
        match segment {
            Value::Int(n) => Self::Index(*n),
            Value::Float(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                Self::Index(*n as i64)
            }
            Value::String(s) => Self::Name(Arc::clone(s)),
            other => Self::Name(other.to_string().into()),
        }
    }

    /// Returns the sequence position this key addresses, if any.
    ///
    /// Non-negative integers and canonical decimal strings (`"2"`, not
    /// `"02"` or `"+2"`) address sequence slots.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(n) => usize::try_from(*n).ok(),
            Self::Name(s) => {
                let canonical = !s.is_empty()
                    && s.bytes().all(|b| b.is_ascii_digit())
                    && (s.len() == 1 || !s.starts_with('0'));
                if canonical { s.parse().ok() } else { None }
            }
        }
    }

    /// Returns the mapping key this segment addresses.
    #[must_use]
    pub fn as_name(&self) -> Cow<'_, str> {
        match self {
            Self::Index(n) => Cow::Owned(n.to_string()),
            Self::Name(s) => Cow::Borrowed(s),
        }
    }

    /// Returns the key as a value (`Int` for indices, `String` for names).
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Index(n) => Value::Int(*n),
            Self::Name(s) => Value::String(Arc::clone(s)),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(n) => write!(f, "{n}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}

impl From<usize> for Key {
    #[allow(clippy::cast_possible_wrap)]
    fn from(index: usize) -> Self {
        Self::Index(index as i64)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.into())
    }
}

impl From<Arc<str>> for Key {
    fn from(name: Arc<str>) -> Self {
        Self::Name(name)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Index(n) => Value::Int(n),
            Key::Name(s) => Value::String(s),
        }
    }
}

/// A normalized traversal route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path(Vec<Key>);

impl Path {
    /// The empty route.
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Normalizes a path specification into a route.
    #[must_use]
    pub fn normalize(spec: &Value) -> Self {
        match spec {
            Value::String(s) if s.is_empty() => Self::root(),
            Value::Seq(segments) => Self(segments.iter().map(Key::from_segment).collect()),
            other => Self(vec![Key::from_segment(other)]),
        }
    }

    /// Returns the keys of this route.
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the identity route.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
