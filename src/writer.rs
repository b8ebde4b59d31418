use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::queue::QueueReceiver;
use crate::rotation::{ManagedFile, RotationPolicy};

/// How long the writer sleeps when the queue is empty.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// The primary stream and its error-level companion.
#[derive(Debug)]
pub struct Streams {
    pub primary: ManagedFile,
    pub errors: ManagedFile,
}

/// Outcome of a single writer iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A message was written.
    Wrote,
    /// The queue was empty.
    Idle,
    /// The writer can no longer write; both files are released.
    Stopped,
}

/// Sole owner of the log files. Drains the queue and rotates files.
#[derive(Debug)]
pub struct WriterLoop {
    streams: Option<Streams>,
    policy: RotationPolicy,
    queue: QueueReceiver,
    shutdown: Arc<AtomicBool>,
}

impl WriterLoop {
    pub fn new(
        streams: Streams,
        policy: RotationPolicy,
        queue: QueueReceiver,
        shutdown: Arc<AtomicBool>,
    ) -> Self {
        Self {
            streams: Some(streams),
            policy,
            queue,
            shutdown,
        }
    }

    /// Run on a dedicated thread until shut down or a rotation fails.
    pub fn spawn(self) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("splitlog-writer".to_string())
            .spawn(move || self.run())
    }

    /// Loop until the shutdown flag is raised or the files are lost.
    ///
    /// Idle iterations park for [`POLL_INTERVAL`]; unparking the thread
    /// cuts the wait short.
    pub fn run(mut self) {
        tracing::debug!("log writer started");
        while !self.shutdown.load(Ordering::Acquire) {
            match self.run_once() {
                Step::Wrote => {}
                Step::Idle => thread::park_timeout(POLL_INTERVAL),
                Step::Stopped => break,
            }
        }
        // Queued messages are discarded along with the receiver.
        self.streams = None;
        tracing::debug!(dropped = self.queue.len(), "log writer stopped");
    }

    /// One iteration: rotate both files if needed, then write at most one
    /// message.
    pub fn run_once(&mut self) -> Step {
        let Some(streams) = self.streams.take() else {
            return Step::Stopped;
        };

        let Some(mut streams) = self.maintain(streams) else {
            return Step::Stopped;
        };

        let step = match self.queue.dequeue() {
            Some(msg) => {
                let line = msg.render();
                // Write errors are not surfaced; logging stays best-effort.
                let _ = streams.primary.write_line(line.as_bytes());
                if msg.level().is_error() {
                    let _ = streams.errors.write_line(line.as_bytes());
                }
                Step::Wrote
            }
            None => Step::Idle,
        };

        self.streams = Some(streams);
        step
    }

    /// Rotate whichever files have reached the size limit. `None` means a
    /// reopen failed and the writer must stop.
    fn maintain(&self, streams: Streams) -> Option<Streams> {
        let Streams { primary, errors } = streams;
        let primary = self.rotate_if_needed(primary)?;
        let errors = self.rotate_if_needed(errors)?;
        Some(Streams { primary, errors })
    }

    fn rotate_if_needed(&self, file: ManagedFile) -> Option<ManagedFile> {
        if !self.policy.needs_rotation(&file) {
            return Some(file);
        }
        match self.policy.rotate(file) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::error!(error = %e, "log rotation failed, writer stopping");
                None
            }
        }
    }

    /// Whether the writer still holds its files.
    pub fn is_running(&self) -> bool {
        self.streams.is_some()
    }
}
