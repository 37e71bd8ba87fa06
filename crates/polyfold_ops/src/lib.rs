//! Polymorphic data operations for Polyfold.
//!
//! Every function here is a pure function of its arguments except the
//! `*_unsafe` variants, which write through a `&mut Value`. Operations
//! dispatch on the shape of their input:
//! - Type predicates ([`is_nil`], [`is_sequence`], [`is_mapping`], ...)
//! - Path engine ([`get`], [`set`], [`set_unsafe`], [`update`])
//! - Iteration ([`reduce`], [`transform`], [`map`], [`filter`], [`each`])
//! - Copying ([`copy`], [`deep_clone`])
//! - Ranking ([`or`], [`Rank`])
//! - Aggregates ([`merge`], [`sort`], [`concat`], [`partition`], [`to_pairs`], [`range`])
//! - Array helpers ([`push_first`], [`push_last`], [`pop_first`], [`pop_last`], ...)
//! - Control flow ([`when`], [`match_value`], [`try_catch`])
//! - Function helpers ([`tap`], [`using`], [`defer`], [`pipe`], [`call`], [`log`])
//! - Sequential async iteration ([`each_sync`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod array;
pub mod control;
pub mod copy;
pub mod func;
pub mod iter;
pub mod path;
pub mod predicates;
pub mod rank;
pub mod sync;

pub use aggregate::{concat, merge, merge_with, partition, range, sort, to_pairs};
pub use array::{
    entries, keys, pop_first, pop_last, push_first, push_first_unsafe, push_last,
    push_last_unsafe, size, values,
};
pub use control::{match_value, try_catch, try_catch_with, when};
pub use copy::{copy, deep_clone};
pub use func::{call, defer, log, pipe, tap, using};
pub use iter::{each, filter, map, reduce, transform};
pub use path::{get, set, set_unsafe, update};
pub use predicates::{is_callable, is_iterable, is_mapping, is_nil, is_sequence};
pub use rank::{Rank, or};
pub use sync::each_sync;

pub use polyfold_foundation::{Indent, parse_json, to_json};
