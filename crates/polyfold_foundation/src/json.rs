//! JSON boundary: serde impls for [`Value`] and the text conversions.
//!
//! `Undefined` and function values have no JSON form. Inside a mapping they
//! are dropped, inside a sequence they become `null`, and at the top level
//! they produce no text at all. Non-finite floats serialize as `null`.

use std::fmt;
use std::sync::Arc;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::collections::{Mapping, Sequence};
use crate::error::{Error, ErrorContext, Result};
use crate::value::Value;

/// Widest indentation honoured by [`Indent::Spaces`].
const MAX_INDENT: usize = 10;

/// Output layout for [`to_json`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Indent {
    /// Single line, no whitespace.
    #[default]
    Compact,
    /// One entry per line, indented by this many spaces (capped at 10).
    Spaces(usize),
}

impl From<bool> for Indent {
    fn from(pretty: bool) -> Self {
        if pretty { Self::Spaces(2) } else { Self::Compact }
    }
}

impl From<usize> for Indent {
    fn from(spaces: usize) -> Self {
        if spaces == 0 {
            Self::Compact
        } else {
            Self::Spaces(spaces.min(MAX_INDENT))
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null | Self::Fn(_) => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(None)?;
                for (key, value) in entries {
                    if value.kind().is_serializable() {
                        map.serialize_entry(&**key, value)?;
                    }
                }
                map.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Value, E> {
        Ok(Value::Int(v))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Value, E> {
        Ok(Value::String(Arc::from(v)))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Value, E> {
        Ok(Value::String(Arc::from(v)))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Value, D::Error> {
        Value::deserialize(d)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> std::result::Result<Value, A::Error> {
        let mut items = Sequence::new();
        while let Some(item) = access.next_element::<Value>()? {
            items.push_back(item);
        }
        Ok(Value::Seq(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Value, A::Error> {
        let mut entries = Mapping::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            entries.insert(key, value);
        }
        Ok(Value::Map(entries))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Serializes `data` to JSON text.
///
/// # Errors
///
/// Returns `NotSerializable` when `data` itself is `Undefined` or a
/// function, and `Json` if the serializer fails.
pub fn try_to_json(data: &Value, indent: impl Into<Indent>) -> Result<String> {
    if !data.kind().is_serializable() {
        return Err(Error::not_serializable(data.kind())
            .with_context(ErrorContext::new().with_operation("to_json")));
    }
    match indent.into() {
        Indent::Compact => Ok(serde_json::to_string(data)?),
        Indent::Spaces(width) => {
            let pad = " ".repeat(width);
            let mut out = Vec::new();
            let formatter = PrettyFormatter::with_indent(pad.as_bytes());
            let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
            data.serialize(&mut serializer)?;
            String::from_utf8(out).map_err(|err| Error::failed(err.to_string()))
        }
    }
}

/// Serializes `data` to JSON text, or `None` when it has no JSON form.
///
/// `true` as indent means two spaces, a number means that many spaces
/// (capped at 10), `false`/`0` means compact.
pub fn to_json(data: &Value, indent: impl Into<Indent>) -> Option<String> {
    try_to_json(data, indent).ok()
}

/// Rebuilds `data` through the JSON data model without going through text.
///
/// The result is what parsing the output of [`try_to_json`] would give, but
/// nesting depth is not limited by the text parser.
///
/// # Errors
///
/// Returns `NotSerializable` when `data` itself is `Undefined` or a
/// function.
pub fn try_json_round_trip(data: &Value) -> Result<Value> {
    if !data.kind().is_serializable() {
        return Err(Error::not_serializable(data.kind())
            .with_context(ErrorContext::new().with_operation("json_round_trip")));
    }
    let tree = serde_json::to_value(data)?;
    Ok(Value::deserialize(tree)?)
}

/// Parses JSON text into a value.
///
/// Text nested more than 128 levels deep is rejected.
///
/// # Errors
///
/// Returns `Json` for malformed input.
pub fn try_parse_json(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|err| {
        Error::from(err).with_context(ErrorContext::new().with_operation("parse_json"))
    })
}

/// Parses JSON text, recovering with `default` instead of failing.
///
/// - nil input is returned unchanged
/// - text is parsed; malformed text yields `default`
/// - booleans and finite numbers are their own JSON form and come back as-is
/// - anything else yields `default`
#[must_use]
pub fn parse_json(raw: &Value, default: Value) -> Value {
    match raw {
        Value::Undefined | Value::Null | Value::Bool(_) | Value::Int(_) => raw.clone(),
        Value::Float(n) if n.is_finite() => raw.clone(),
        Value::String(text) => match try_parse_json(text) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(error = %err, "malformed json, using default");
                default
            }
        },
        _ => default,
    }
}
