//! Sequential asynchronous iteration.

use std::future::Future;

use polyfold_foundation::{Key, Value};

use crate::iter::reduce;

/// Runs `step(value, key)` for every entry of `data`, one at a time.
///
/// Each step's future is awaited to completion before the next step is
/// created, so steps finish in source order no matter how long each one
/// takes. The first error stops the iteration and is returned.
/// Non-containers run no steps.
///
/// # Errors
///
/// Returns the first error produced by `step`.
pub async fn each_sync<F, Fut, E>(data: &Value, mut step: F) -> Result<(), E>
where
    F: FnMut(Value, Key) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let entries = reduce(
        data,
        |mut acc: Vec<(Value, Key)>, value, key, _| {
            acc.push((value.clone(), key.clone()));
            acc
        },
        Vec::new(),
    );

    for (position, (value, key)) in entries.into_iter().enumerate() {
        step(value, key.clone()).await?;
        tracing::trace!(position, %key, "each_sync step finished");
    }
    Ok(())
}
