//! # fibseq-core
//!
//! Core library of the fibseq computation engine: a cancellable,
//! batch-producing Fibonacci sequence generator, a single-value point
//! query engine, and the typed events both stream to their consumer.

pub mod constants;
pub mod error;
pub mod event;
pub mod generator;
pub mod generator_iterative;
pub mod options;
pub mod point;
pub mod progress;
pub mod sink;
pub mod sinks;

// Re-exports
pub use constants::{
    exit_codes, CONFIRMATION_THRESHOLD, DEFAULT_BATCH_SIZE, DEFAULT_POLL_INTERVAL_MS,
    MAX_POINT_POSITION, MAX_SEQUENCE_QUANTITY,
};
pub use error::FibError;
pub use event::Event;
pub use generator::SequenceGenerator;
pub use generator_iterative::IterativeGenerator;
pub use options::EngineOptions;
pub use point::PointQueryEngine;
pub use progress::CancellationToken;
pub use sink::{EventSink, FanoutSink};

use num_bigint::BigUint;

/// Compute F(position) with the 1-indexed convention F(1) = F(2) = 1.
///
/// This is a convenience function for simple use cases. To stream the
/// result to a consumer, run `PointQueryEngine::query` on a worker.
///
/// # Example
/// ```
/// assert_eq!(fibseq_core::fibonacci(10).unwrap().to_string(), "55");
/// assert!(fibseq_core::fibonacci(0).is_err());
/// ```
pub fn fibonacci(position: u64) -> Result<BigUint, FibError> {
    PointQueryEngine::new().compute(position)
}
