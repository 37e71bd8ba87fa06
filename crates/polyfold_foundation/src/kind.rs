//! Value classification.

use std::fmt;

/// The shape of a [`Value`](crate::Value).
///
/// Every predicate in Polyfold is a question about the kind of a value, and
/// every type-related error reports the kinds involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// Never set.
    Undefined,
    /// Explicitly empty.
    Null,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Text.
    String,
    /// Ordered, index-addressed container.
    Seq,
    /// Insertion-ordered keyed container.
    Map,
    /// Function value.
    Fn,
}

impl Kind {
    /// Returns true for both nil flavors.
    #[must_use]
    pub const fn is_nil(self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns true for sequences and mappings.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Seq | Self::Map)
    }

    /// Returns true for integers and floats.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Returns true if values of this kind survive a JSON round trip.
    ///
    /// `Undefined` and `Fn` have no JSON representation and are dropped
    /// from mappings (or written as `null` inside sequences).
    #[must_use]
    pub const fn is_serializable(self) -> bool {
        !matches!(self, Self::Undefined | Self::Fn)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Seq => "sequence",
            Self::Map => "mapping",
            Self::Fn => "fn",
        };
        f.write_str(name)
    }
}
