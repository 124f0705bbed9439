//! Orchestration interfaces implemented by front ends.

use fibseq_core::event::Event;

use crate::policy::TimeEstimate;

/// Asks the user whether a long sequence generation should start.
pub trait ConfirmationGate: Send + Sync {
    /// Return `true` to start generating `quantity` numbers.
    fn confirm(&self, quantity: u64, estimate: TimeEstimate) -> bool;
}

/// Renders the events drained from the channel.
pub trait EventPresenter {
    /// Present one event.
    fn present(&self, event: &Event);
}

/// Gate that accepts every request (`--yes`).
pub struct AlwaysConfirm;

impl ConfirmationGate for AlwaysConfirm {
    fn confirm(&self, _quantity: u64, _estimate: TimeEstimate) -> bool {
        true
    }
}

/// Gate that declines every request.
pub struct NeverConfirm;

impl ConfirmationGate for NeverConfirm {
    fn confirm(&self, _quantity: u64, _estimate: TimeEstimate) -> bool {
        false
    }
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl EventPresenter for NullPresenter {
    fn present(&self, _event: &Event) {}
}
