//! Single-value Fibonacci lookup.
//!
//! Point queries use the 1-indexed convention F(1) = F(2) = 1 and compute
//! only the target value: O(position) additions with two live values.
//! There is no cancellation checkpoint; callers bound the position instead.

use std::panic::{self, AssertUnwindSafe};

use num_bigint::BigUint;
use num_traits::One;
use tracing::debug;

use crate::constants::{FIB_TABLE, MAX_FIB_U64};
use crate::error::{panic_detail, FibError};
use crate::event::Event;

/// Engine answering point queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointQueryEngine;

impl PointQueryEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute F(position), 1-indexed.
    ///
    /// # Example
    /// ```
    /// use fibseq_core::point::PointQueryEngine;
    ///
    /// let engine = PointQueryEngine::new();
    /// assert_eq!(engine.compute(10).unwrap().to_string(), "55");
    /// assert!(engine.compute(0).is_err());
    /// ```
    pub fn compute(&self, position: u64) -> Result<BigUint, FibError> {
        match position {
            0 => Err(FibError::InvalidInput("position must be positive".into())),
            1 | 2 => Ok(BigUint::one()),
            p if p <= MAX_FIB_U64 => Ok(Self::calculate_small(p)),
            p => Ok(Self::iterate(p)),
        }
    }

    /// Answer a query as the event a worker would stream.
    ///
    /// Faults, panics included, become a single `Error` event.
    pub fn query(&self, position: u64) -> Event {
        debug!(position, "Point query started");
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.compute(position)));
        match outcome {
            Ok(Ok(value)) => Event::PointResult { position, value },
            Ok(Err(e)) => Event::Error {
                message: format!("Error calculating Fibonacci number: {e}"),
            },
            Err(payload) => Event::Error {
                message: format!(
                    "Error calculating Fibonacci number: {}",
                    panic_detail(payload.as_ref())
                ),
            },
        }
    }

    /// Fast path for small positions using the precomputed table.
    #[allow(clippy::cast_possible_truncation)]
    fn calculate_small(position: u64) -> BigUint {
        BigUint::from(FIB_TABLE[position as usize])
    }

    /// Advance (a, b) from (1, 1) exactly `position - 2` times.
    fn iterate(position: u64) -> BigUint {
        let mut a = BigUint::one();
        let mut b = BigUint::one();
        for _ in 0..position - 2 {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
        }
        b
    }
}
