//! Engine options and configuration.

use std::time::Duration;

use crate::constants::{
    CONFIRMATION_THRESHOLD, DEFAULT_BATCH_SIZE, DEFAULT_POLL_INTERVAL_MS, MAX_POINT_POSITION,
    MAX_SEQUENCE_QUANTITY,
};

/// Startup configuration for the computation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Hard limit on sequence quantity.
    pub max_quantity: u64,
    /// Quantities above this need confirmation.
    pub confirmation_threshold: u64,
    /// Hard limit on point query position.
    pub max_position: u64,
    /// Lines per `Batch` event.
    pub batch_size: usize,
    /// Consumer polling cadence.
    pub poll_interval: Duration,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_quantity: MAX_SEQUENCE_QUANTITY,
            confirmation_threshold: CONFIRMATION_THRESHOLD,
            max_position: MAX_POINT_POSITION,
            batch_size: DEFAULT_BATCH_SIZE,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl EngineOptions {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.max_quantity == 0 {
            self.max_quantity = MAX_SEQUENCE_QUANTITY;
        }
        if self.confirmation_threshold == 0 {
            self.confirmation_threshold = CONFIRMATION_THRESHOLD;
        }
        if self.max_position == 0 {
            self.max_position = MAX_POINT_POSITION;
        }
        if self.batch_size == 0 {
            self.batch_size = DEFAULT_BATCH_SIZE;
        }
        if self.poll_interval.is_zero() {
            self.poll_interval = Duration::from_millis(DEFAULT_POLL_INTERVAL_MS);
        }
        self
    }
}
