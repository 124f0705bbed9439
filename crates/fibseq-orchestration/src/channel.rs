//! FIFO event channel between a worker and the consumer.

use crossbeam_channel::{Receiver, Sender};

use fibseq_core::event::Event;
use fibseq_core::sinks::ChannelSink;

/// Unbounded multi-producer, single-consumer event queue.
///
/// Producers never block and never drop; the consumer drains whatever is
/// available without waiting.
pub struct EventChannel {
    tx: Sender<Event>,
    rx: Receiver<Event>,
}

impl EventChannel {
    /// Create an empty channel.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }

    /// Producer handle for a worker.
    #[must_use]
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    /// Producer handle wrapped as an `EventSink`.
    #[must_use]
    pub fn sink(&self) -> ChannelSink {
        ChannelSink::new(self.sender())
    }

    /// Append an event without blocking.
    pub fn push(&self, event: Event) {
        // The channel owns a receiver, so sending cannot fail.
        let _ = self.tx.send(event);
    }

    /// Take every event available right now, in emission order.
    ///
    /// Returns an empty vector when nothing is queued.
    #[must_use]
    pub fn drain(&self) -> Vec<Event> {
        self.rx.try_iter().collect()
    }

    /// Number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Default for EventChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibseq_core::sink::EventSink;

    #[test]
    fn drain_empty_returns_immediately() {
        let channel = EventChannel::new();
        assert!(channel.is_empty());
        assert!(channel.drain().is_empty());
    }

    #[test]
    fn drain_preserves_fifo_order() {
        let channel = EventChannel::new();
        for i in 1..=5 {
            channel.push(Event::Progress { completed: i });
        }
        assert_eq!(channel.len(), 5);

        let drained = channel.drain();
        let values: Vec<u64> = drained
            .iter()
            .map(|e| match e {
                Event::Progress { completed } => *completed,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(values, [1, 2, 3, 4, 5]);
        assert!(channel.is_empty());
    }

    #[test]
    fn sink_feeds_the_channel() {
        let channel = EventChannel::new();
        let sink = channel.sink();
        sink.emit(Event::Progress { completed: 1 });
        assert_eq!(channel.drain(), vec![Event::Progress { completed: 1 }]);
    }

    #[test]
    fn producer_on_other_thread() {
        let channel = EventChannel::new();
        let tx = channel.sender();
        std::thread::spawn(move || {
            for i in 1..=100 {
                tx.send(Event::Progress { completed: i }).unwrap();
            }
        })
        .join()
        .unwrap();

        let drained = channel.drain();
        assert_eq!(drained.len(), 100);
        assert_eq!(drained[99], Event::Progress { completed: 100 });
    }

    #[test]
    fn successive_drains_split_the_stream() {
        let channel = EventChannel::new();
        channel.push(Event::Progress { completed: 1 });
        assert_eq!(channel.drain().len(), 1);
        channel.push(Event::Progress { completed: 2 });
        assert_eq!(channel.drain(), vec![Event::Progress { completed: 2 }]);
    }
}
