//! Cooperative cancellation shared between a coordinator and its worker.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::FibError;

/// Cooperative cancellation token using an atomic bool.
///
/// Clones share the same flag, so the owner keeps one handle and moves a
/// clone into the worker thread.
///
/// # Example
/// ```
/// use fibseq_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
///
/// token.reset();
/// assert!(token.check_cancelled().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Clear a previous cancellation request before a new run.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::Release);
    }

    /// Check for cancellation, returning an error if cancelled.
    ///
    /// Use this as a checkpoint in generation loops.
    pub fn check_cancelled(&self) -> Result<(), FibError> {
        if self.is_cancelled() {
            Err(FibError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
