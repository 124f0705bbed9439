//! # fibseq-orchestration
//!
//! Bounds policy, the event channel, and the coordinator that runs one
//! computation at a time on a background worker.

pub mod channel;
pub mod coordinator;
pub mod interfaces;
pub mod policy;

pub use channel::EventChannel;
pub use coordinator::{
    ComputationKind, Coordinator, CoordinatorError, CoordinatorState, StartOutcome,
};
pub use interfaces::{
    AlwaysConfirm, ConfirmationGate, EventPresenter, NeverConfirm, NullPresenter,
};
pub use policy::{BoundsPolicy, SequenceCheck, TimeEstimate, ValidationError};
