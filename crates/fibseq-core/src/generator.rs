//! Sequence generator trait.

use crate::progress::CancellationToken;
use crate::sink::EventSink;

/// Trait for generating the first N Fibonacci numbers as a stream of events.
pub trait SequenceGenerator: Send + Sync {
    /// Generate `quantity` numbers, emitting `Started`, `Batch`/`Progress`
    /// and exactly one terminal event into `sink`.
    ///
    /// Never panics and never returns early without a terminal event.
    fn generate(&self, quantity: u64, cancel: &CancellationToken, sink: &dyn EventSink);

    /// Get the name of this generator.
    fn name(&self) -> &str;
}
