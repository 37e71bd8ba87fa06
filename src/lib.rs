//! Polyfold - polymorphic operations over nested sequences and mappings
//!
//! This crate re-exports all layers of the Polyfold system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: polyfold_ops        — Path engine, iteration, ranking, aggregates
//! Layer 0: polyfold_foundation — Core types (Value, Key, Path, Error), JSON
//! ```

pub use polyfold_foundation as foundation;
pub use polyfold_ops as ops;
