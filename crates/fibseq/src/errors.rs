//! Error handling and exit codes.

use fibseq_core::constants::exit_codes;
use fibseq_core::event::Event;
use fibseq_orchestration::coordinator::CoordinatorError;

/// Exit code for a start request the coordinator refused.
#[must_use]
pub fn handle_error(err: &CoordinatorError) -> i32 {
    match err {
        CoordinatorError::Validation(_) => exit_codes::ERROR_VALIDATION,
        CoordinatorError::Busy(_) => exit_codes::ERROR_BUSY,
        CoordinatorError::Spawn(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for the event that ended a run.
#[must_use]
pub fn exit_code_for(terminal: &Event) -> i32 {
    match terminal {
        Event::Completed { .. } | Event::PointResult { .. } => exit_codes::SUCCESS,
        Event::Stopped { .. } => exit_codes::ERROR_CANCELED,
        _ => exit_codes::ERROR_GENERIC,
    }
}
