//! Consumer polling loop.

use std::thread;
use std::time::Duration;

use fibseq_core::event::Event;
use fibseq_orchestration::coordinator::Coordinator;
use fibseq_orchestration::interfaces::EventPresenter;

/// Poll `coordinator` every `interval`, presenting each event, until the
/// run's terminal event arrives. Returns that event.
///
/// Returns `None` if the coordinator is idle and has nothing queued.
pub fn drive(
    coordinator: &Coordinator,
    presenter: &dyn EventPresenter,
    interval: Duration,
) -> Option<Event> {
    loop {
        // Sampled before draining: once idle, the terminal event is queued.
        let idle = !coordinator.is_busy();
        for event in coordinator.poll_events() {
            presenter.present(&event);
            if event.is_terminal() {
                return Some(event);
            }
        }
        if idle {
            return None;
        }
        thread::sleep(interval);
    }
}
