//! Instrumented entry points
//!
//! Each function forwards to `numseq-core` and reports through `tracing`.
//! Behaviour and results are exactly those of the core functions.

use tracing::{debug, trace};

use crate::{Number, Produce, Result, Value, ValueSequence};

/// Produce the sequence `0, 1, ..., n - 1` lazily
///
/// See [`numseq_core::produce`].
pub fn produce<N: Number>(n: N) -> Produce<N> {
    trace!(bound = ?n, "producing sequence");
    numseq_core::produce(n)
}

/// Double `x`, rejecting negative input with [`NumseqError::Negative`](crate::NumseqError::Negative)
///
/// See [`numseq_core::double_or_reject`].
pub fn double_or_reject<N: Number>(x: N) -> Result<N> {
    let result = numseq_core::double_or_reject(x);
    log_outcome(&x, &result);
    result
}

/// Produce `0, 1, ..., n - 1` for a runtime-typed bound
///
/// See [`numseq_core::produce_value`].
pub fn produce_value(n: &Value) -> ValueSequence {
    if !n.is_number() {
        // The error itself is deferred to the first pull
        trace!(bound = ?n, "non-numeric sequence bound");
    }
    numseq_core::produce_value(n)
}

/// Double a runtime-typed value
///
/// See [`numseq_core::double_value`].
pub fn double_value(x: &Value) -> Result<Value> {
    let result = numseq_core::double_value(x);
    log_outcome(x, &result);
    result
}

fn log_outcome<I: core::fmt::Debug, O: core::fmt::Debug>(input: &I, result: &Result<O>) {
    match result {
        Ok(output) => trace!(input = ?input, output = ?output, "doubled"),
        Err(err) => debug!(input = ?input, category = ?err.category(), "rejected: {err}"),
    }
}
