//! Computation coordinator: bounds policy, single-worker lifecycle, and
//! cooperative cancellation.
//!
//! The coordinator owns the cancellation token, the event channel and a
//! state guard that admits one worker at a time. A worker's terminal event
//! is pushed under the state lock together with the return to `Idle`, so a
//! consumer that has drained a terminal event can start the next run
//! immediately.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use fibseq_core::event::Event;
use fibseq_core::generator::SequenceGenerator;
use fibseq_core::generator_iterative::IterativeGenerator;
use fibseq_core::options::EngineOptions;
use fibseq_core::point::PointQueryEngine;
use fibseq_core::progress::CancellationToken;
use fibseq_core::sink::{EventSink, FanoutSink};
use fibseq_core::sinks::{ChannelSink, LoggingSink};

use crate::channel::EventChannel;
use crate::interfaces::ConfirmationGate;
use crate::policy::{BoundsPolicy, SequenceCheck, ValidationError};

/// Minimum interval between progress log lines.
const PROGRESS_LOG_INTERVAL_MS: u64 = 1_000;

/// Which kind of computation a worker runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputationKind {
    Sequence,
    Point,
}

impl fmt::Display for ComputationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence => f.write_str("sequence generation"),
            Self::Point => f.write_str("point query"),
        }
    }
}

/// Coordinator lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorState {
    Idle,
    Running(ComputationKind),
}

/// Result of a start request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A worker was spawned.
    Started,
    /// The confirmation gate declined; nothing ran and nothing was emitted.
    Declined,
}

/// Error returned synchronously by the start operations.
#[derive(Debug, thiserror::Error)]
pub enum CoordinatorError {
    /// Input rejected by the bounds policy.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another computation is still running.
    #[error("a {0} is already running")]
    Busy(ComputationKind),

    /// The worker thread could not be spawned.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] io::Error),
}

/// Sink handed to a worker: logger and taps, then the channel, with the
/// terminal event and the return to `Idle` done under the state lock.
struct RunSink {
    logger: Arc<LoggingSink>,
    taps: Arc<FanoutSink>,
    channel: ChannelSink,
    state: Arc<Mutex<CoordinatorState>>,
    delivered: Arc<AtomicBool>,
}

impl EventSink for RunSink {
    fn emit(&self, event: Event) {
        self.logger.log(&event);
        if self.taps.count() > 0 {
            self.taps.emit(event.clone());
        }
        if event.is_terminal() {
            let mut state = self.state.lock();
            self.channel.emit(event);
            self.delivered.store(true, Ordering::Release);
            *state = CoordinatorState::Idle;
        } else {
            self.channel.emit(event);
        }
    }
}

/// A spawned worker and whether its run has pushed a terminal event.
struct Worker {
    handle: JoinHandle<()>,
    delivered: Arc<AtomicBool>,
}

/// Starts, stops and drains computations for one consumer.
pub struct Coordinator {
    policy: BoundsPolicy,
    batch_size: usize,
    cancel: CancellationToken,
    channel: EventChannel,
    logger: Arc<LoggingSink>,
    taps: Arc<FanoutSink>,
    state: Arc<Mutex<CoordinatorState>>,
    worker: Mutex<Option<Worker>>,
}

impl Coordinator {
    /// Create an idle coordinator.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        let options = options.normalize();
        Self {
            policy: BoundsPolicy::new(&options),
            batch_size: options.batch_size,
            cancel: CancellationToken::new(),
            channel: EventChannel::new(),
            logger: Arc::new(LoggingSink::new(PROGRESS_LOG_INTERVAL_MS)),
            taps: Arc::new(FanoutSink::new()),
            state: Arc::new(Mutex::new(CoordinatorState::Idle)),
            worker: Mutex::new(None),
        }
    }

    /// Register an extra sink receiving a copy of every run event.
    pub fn tap(&self, sink: Arc<dyn EventSink>) {
        self.taps.register(sink);
    }

    /// Validate `quantity` and, if allowed, start generating the sequence.
    ///
    /// Quantities above the confirmation threshold are put to `gate`
    /// first; a declined request starts nothing and emits nothing.
    pub fn start_sequence(
        &self,
        quantity: i64,
        gate: &dyn ConfirmationGate,
    ) -> Result<StartOutcome, CoordinatorError> {
        let check = self
            .policy
            .check_quantity(quantity)
            .inspect_err(|e| warn!(quantity, error = %e, "Sequence request rejected"))?;
        self.ensure_idle()?;

        let quantity = check.quantity();
        if let SequenceCheck::NeedsConfirmation { estimate, .. } = check {
            if !gate.confirm(quantity, estimate) {
                info!(quantity, %estimate, "Sequence generation declined");
                return Ok(StartOutcome::Declined);
            }
        }

        let generator = IterativeGenerator::with_batch_size(self.batch_size);
        debug!(
            generator = generator.name(),
            batch_size = self.batch_size,
            "Spawning sequence worker"
        );
        let cancel = self.cancel.clone();
        self.spawn(ComputationKind::Sequence, "fibseq-sequence", move |sink| {
            generator.generate(quantity, &cancel, &sink);
        })?;
        info!(quantity, "Sequence generation started");
        Ok(StartOutcome::Started)
    }

    /// Validate `position` and start a point query.
    pub fn start_point(&self, position: i64) -> Result<(), CoordinatorError> {
        let position = self
            .policy
            .check_position(position)
            .inspect_err(|e| warn!(position, error = %e, "Point request rejected"))?;

        let engine = PointQueryEngine::new();
        self.spawn(ComputationKind::Point, "fibseq-point", move |sink| {
            sink.emit(engine.query(position));
        })?;
        info!(position, "Point query started");
        Ok(())
    }

    /// Request cancellation of a running sequence generation.
    ///
    /// Returns whether a request was made. Point queries have no
    /// checkpoint, and an idle coordinator has nothing to stop.
    pub fn stop(&self) -> bool {
        let state = self.state.lock();
        if *state == CoordinatorState::Running(ComputationKind::Sequence) {
            self.cancel.cancel();
            info!("Stop requested");
            true
        } else {
            debug!(state = ?*state, "Stop ignored");
            false
        }
    }

    /// Drain every event available right now. Never blocks.
    #[must_use]
    pub fn poll_events(&self) -> Vec<Event> {
        self.reap_crashed_worker();
        self.channel.drain()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> CoordinatorState {
        *self.state.lock()
    }

    /// Whether a worker is running.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state() != CoordinatorState::Idle
    }

    /// Block until the most recent worker has exited.
    ///
    /// The worker slot is released before joining, so `poll_events` and
    /// `state` stay responsive from other threads meanwhile.
    pub fn wait(&self) {
        let taken = self.worker.lock().take();
        if let Some(worker) = taken {
            self.join(worker);
        }
    }

    fn ensure_idle(&self) -> Result<(), CoordinatorError> {
        match *self.state.lock() {
            CoordinatorState::Idle => Ok(()),
            CoordinatorState::Running(kind) => {
                warn!(running = %kind, "Start rejected, coordinator busy");
                Err(CoordinatorError::Busy(kind))
            }
        }
    }

    // Lock order: worker slot, then state.
    fn spawn<F>(&self, kind: ComputationKind, name: &str, work: F) -> Result<(), CoordinatorError>
    where
        F: FnOnce(RunSink) + Send + 'static,
    {
        let mut slot = self.worker.lock();
        let mut state = self.state.lock();
        if let CoordinatorState::Running(running) = *state {
            warn!(running = %running, "Start rejected, coordinator busy");
            return Err(CoordinatorError::Busy(running));
        }
        if kind == ComputationKind::Sequence {
            self.cancel.reset();
        }

        let delivered = Arc::new(AtomicBool::new(false));
        let sink = RunSink {
            logger: Arc::clone(&self.logger),
            taps: Arc::clone(&self.taps),
            channel: self.channel.sink(),
            state: Arc::clone(&self.state),
            delivered: Arc::clone(&delivered),
        };
        // The worker cannot reach its terminal event before `state` is
        // released, so setting Running after the spawn is race-free.
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || work(sink))
            .map_err(CoordinatorError::Spawn)?;
        *state = CoordinatorState::Running(kind);
        drop(state);

        let previous = slot.replace(Worker { handle, delivered });
        drop(slot);
        if let Some(previous) = previous {
            // Only reachable from Idle, so the previous run has delivered.
            if previous.handle.join().is_err() {
                warn!("Previous worker panicked after its terminal event");
            }
        }
        Ok(())
    }

    /// Join a worker that has already exited. Skipped while another thread
    /// holds the slot, so polling never blocks.
    fn reap_crashed_worker(&self) {
        let Some(mut slot) = self.worker.try_lock() else {
            return;
        };
        if !slot.as_ref().is_some_and(|w| w.handle.is_finished()) {
            return;
        }
        let taken = slot.take();
        drop(slot);
        if let Some(worker) = taken {
            self.join(worker);
        }
    }

    fn join(&self, worker: Worker) {
        let panicked = worker.handle.join().is_err();
        self.recover(&worker.delivered, panicked);
    }

    /// A worker that exited without its terminal event leaves the state
    /// `Running`, which blocks every start; close its run with an `Error`
    /// event.
    fn recover(&self, delivered: &AtomicBool, panicked: bool) {
        let mut state = self.state.lock();
        if delivered.load(Ordering::Acquire) {
            return;
        }
        let detail = if panicked {
            "worker panicked"
        } else {
            "worker exited without a result"
        };
        warn!(detail, "Recovering from crashed worker");
        self.channel.push(Event::Error {
            message: format!("Error during computation: {detail}"),
        });
        delivered.store(true, Ordering::Release);
        *state = CoordinatorState::Idle;
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        if *self.state.lock() == CoordinatorState::Running(ComputationKind::Sequence) {
            self.cancel.cancel();
        }
    }
}
