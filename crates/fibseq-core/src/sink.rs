//! Sink pattern for streaming events out of a worker.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::event::Event;

/// Receiver of the events produced by a computation run.
///
/// `emit` must not block: workers call it from their hot loop.
pub trait EventSink: Send + Sync {
    /// Deliver one event.
    fn emit(&self, event: Event);
}

/// Sink that forwards every event to a collection of sinks, in
/// registration order.
pub struct FanoutSink {
    sinks: RwLock<Vec<Arc<dyn EventSink>>>,
}

impl FanoutSink {
    /// Create a fan-out with no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sinks: RwLock::new(Vec::new()),
        }
    }

    /// Register a sink.
    pub fn register(&self, sink: Arc<dyn EventSink>) {
        self.sinks.write().push(sink);
    }

    /// Get the number of registered sinks.
    #[must_use]
    pub fn count(&self) -> usize {
        self.sinks.read().len()
    }
}

impl Default for FanoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for FanoutSink {
    fn emit(&self, event: Event) {
        let sinks = self.sinks.read();
        if let Some((last, rest)) = sinks.split_last() {
            for sink in rest {
                sink.emit(event.clone());
            }
            last.emit(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::CollectingSink;

    #[test]
    fn fanout_register_and_count() {
        let fanout = FanoutSink::new();
        assert_eq!(fanout.count(), 0);

        fanout.register(Arc::new(CollectingSink::new()));
        assert_eq!(fanout.count(), 1);

        fanout.register(Arc::new(FanoutSink::default()));
        assert_eq!(fanout.count(), 2);
    }

    #[test]
    fn fanout_delivers_to_every_sink_in_order() {
        let fanout = FanoutSink::new();
        let first = Arc::new(CollectingSink::new());
        let second = Arc::new(CollectingSink::new());
        fanout.register(first.clone());
        fanout.register(second.clone());

        fanout.emit(Event::Progress { completed: 1 });
        fanout.emit(Event::Progress { completed: 2 });

        let expected = vec![
            Event::Progress { completed: 1 },
            Event::Progress { completed: 2 },
        ];
        assert_eq!(first.events(), expected);
        assert_eq!(second.events(), expected);
    }

    #[test]
    fn fanout_empty_does_not_panic() {
        let fanout = FanoutSink::new();
        fanout.emit(Event::Progress { completed: 1 });
    }
}
