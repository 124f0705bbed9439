//! Concrete sink implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::event::Event;
use crate::sink::EventSink;

/// Sink that sends events through a channel.
///
/// Meant for unbounded channels, where a send never blocks and never
/// drops. A send only fails once the receiver is gone, and then there is
/// nobody left to tell.
pub struct ChannelSink {
    sender: Sender<Event>,
}

impl ChannelSink {
    /// Create a new channel sink.
    #[must_use]
    pub fn new(sender: Sender<Event>) -> Self {
        Self { sender }
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: Event) {
        if self.sender.send(event).is_err() {
            debug!("event receiver dropped");
        }
    }
}

/// Sink that mirrors events into `tracing`, throttling progress lines.
pub struct LoggingSink {
    min_interval_ms: u64,
    last_time: AtomicU64,
}

impl LoggingSink {
    /// Create a new logging sink with the given minimum interval between
    /// progress lines.
    #[must_use]
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_time: AtomicU64::new(0),
        }
    }

    /// Log one event without taking ownership of it.
    #[allow(clippy::cast_possible_truncation)]
    pub fn log(&self, event: &Event) {
        match event {
            Event::Started { .. } => info!("Sequence generation started"),
            Event::Batch { text } => debug!(lines = text.lines().count(), "Batch emitted"),
            Event::Progress { completed } => {
                let now = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_millis() as u64;
                let last_time = self.last_time.load(Ordering::Relaxed);
                if now.saturating_sub(last_time) >= self.min_interval_ms {
                    debug!(completed, "Progress update");
                    self.last_time.store(now, Ordering::Relaxed);
                }
            }
            Event::Completed { .. } => info!("Sequence generation complete"),
            Event::Stopped { .. } => info!("Sequence generation stopped"),
            Event::Error { message } => warn!(%message, "Computation failed"),
            Event::PointResult { position, value } => {
                info!(position, bits = value.bits(), "Point query complete");
            }
        }
    }
}

impl EventSink for LoggingSink {
    fn emit(&self, event: Event) {
        self.log(&event);
    }
}

/// Sink that records every event in memory.
pub struct CollectingSink {
    events: Mutex<Vec<Event>>,
}

impl CollectingSink {
    /// Create an empty collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the events received so far.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Take the recorded events, leaving the sink empty.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl Default for CollectingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for CollectingSink {
    fn emit(&self, event: Event) {
        self.events.lock().push(event);
    }
}
