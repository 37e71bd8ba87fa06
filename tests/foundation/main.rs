//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Sequence, Mapping, Key, Path, Error, and the
//! JSON boundary.

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("polyfold=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod json;
