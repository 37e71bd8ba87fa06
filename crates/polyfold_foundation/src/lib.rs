//! Core values, containers, paths, and the JSON boundary for Polyfold.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value every Polyfold operation works on
//! - [`Kind`] - Value classification for predicates and diagnostics
//! - [`Key`] and [`Path`] - Normalized traversal routes
//! - [`Error`] - Rich error types with context
//! - Copy-on-write containers ([`Sequence`], [`Mapping`]) and [`Callable`]
//! - JSON conversion ([`to_json`], [`parse_json`], [`Indent`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod json;
pub mod kind;
pub mod path;
pub mod value;

pub use collections::{Mapping, Sequence};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use json::{Indent, parse_json, to_json, try_json_round_trip, try_parse_json, try_to_json};
pub use kind::Kind;
pub use path::{Key, Path};
pub use value::{Callable, Value};
