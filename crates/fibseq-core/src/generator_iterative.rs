//! Iterative Fibonacci sequence generator.

use std::fmt::Write as _;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::constants::{DEFAULT_BATCH_SIZE, SEQUENCE_HEADER, STOPPED_MESSAGE};
use crate::error::{panic_detail, FibError};
use crate::event::Event;
use crate::generator::SequenceGenerator;
use crate::progress::CancellationToken;
use crate::sink::EventSink;

/// Iterative generator that walks the additive recurrence from (0, 1).
///
/// Line `i` of the output (1-indexed) carries the `(i - 1)`-th term of
/// the 0-indexed sequence, so the stream starts `1. 0`, `2. 1`, `3. 1`.
pub struct IterativeGenerator {
    batch_size: usize,
}

impl IterativeGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_batch_size(DEFAULT_BATCH_SIZE)
    }

    /// Create a generator flushing every `batch_size` lines (0 means default).
    #[must_use]
    pub fn with_batch_size(batch_size: usize) -> Self {
        let batch_size = if batch_size == 0 {
            DEFAULT_BATCH_SIZE
        } else {
            batch_size
        };
        Self { batch_size }
    }

    /// Get the configured batch size.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn run(
        &self,
        quantity: u64,
        cancel: &CancellationToken,
        sink: &dyn EventSink,
    ) -> Result<(), FibError> {
        if quantity == 0 {
            return Err(FibError::InvalidInput("quantity must be positive".into()));
        }

        let mut a = BigUint::zero();
        let mut b = BigUint::one();
        let mut buffer = String::new();
        let mut lines = 0usize;

        for position in 1..=quantity {
            cancel.check_cancelled()?;

            writeln!(buffer, "{position}. {a}")
                .map_err(|e| FibError::Calculation(e.to_string()))?;
            lines += 1;

            let next = &a + &b;
            a = std::mem::replace(&mut b, next);

            if lines >= self.batch_size || position == quantity {
                sink.emit(Event::Batch {
                    text: std::mem::take(&mut buffer),
                });
                lines = 0;
            }

            sink.emit(Event::Progress {
                completed: position,
            });
        }

        Ok(())
    }
}

impl Default for IterativeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for IterativeGenerator {
    fn generate(&self, quantity: u64, cancel: &CancellationToken, sink: &dyn EventSink) {
        let start = Instant::now();
        debug!(quantity, batch_size = self.batch_size, "Generating sequence");

        sink.emit(Event::Started {
            header: SEQUENCE_HEADER.to_string(),
        });

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.run(quantity, cancel, sink)));
        let terminal = match outcome {
            Ok(Ok(())) => Event::Completed {
                summary: format!("\nGeneration complete! Generated {quantity} Fibonacci numbers."),
            },
            Ok(Err(FibError::Cancelled)) => Event::Stopped {
                message: STOPPED_MESSAGE.to_string(),
            },
            Ok(Err(e)) => Event::Error {
                message: format!("Error during generation: {e}"),
            },
            Err(payload) => Event::Error {
                message: format!("Error during generation: {}", panic_detail(payload.as_ref())),
            },
        };

        debug!(
            quantity,
            outcome = terminal.kind(),
            elapsed = ?start.elapsed(),
            "Sequence run finished"
        );
        sink.emit(terminal);
    }

    fn name(&self) -> &'static str {
        "IterativeGenerator"
    }
}
