//! Error type for computations running inside a worker.

use std::any::Any;

/// Error raised inside the generator or the point query engine.
///
/// These never cross the channel as-is: the worker boundary turns
/// `Cancelled` into a `Stopped` event and everything else into an
/// `Error` event.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// The engine was called with input outside its precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Calculation was cancelled.
    #[error("calculation cancelled")]
    Cancelled,
}

/// Describe a panic payload caught with `catch_unwind`.
pub(crate) fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panic: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panic: {msg}")
    } else {
        "panic with unknown payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_error_display() {
        let err = FibError::Calculation("test".into());
        assert_eq!(err.to_string(), "calculation error: test");

        let err = FibError::InvalidInput("quantity must be positive".into());
        assert_eq!(err.to_string(), "invalid input: quantity must be positive");

        let err = FibError::Cancelled;
        assert_eq!(err.to_string(), "calculation cancelled");
    }

    #[test]
    fn panic_detail_str_payload() {
        let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(panic_detail(payload.as_ref()), "panic: boom");
    }

    #[test]
    fn panic_detail_string_payload() {
        let payload = std::panic::catch_unwind(|| panic!("bad {}", 42)).unwrap_err();
        assert_eq!(panic_detail(payload.as_ref()), "panic: bad 42");
    }

    #[test]
    fn panic_detail_unknown_payload() {
        let payload = std::panic::catch_unwind(|| std::panic::panic_any(7u8)).unwrap_err();
        assert_eq!(panic_detail(payload.as_ref()), "panic with unknown payload");
    }
}
