//! Bounded hand-off between logging callers and the writer.
//!
//! Producers never wait: when every slot is taken the new message is
//! dropped on the floor. The consumer polls without blocking.

use crossbeam_channel::{Receiver, Sender, TryRecvError, TrySendError};

use crate::LogMessage;

/// Default number of messages buffered between callers and the writer.
pub const DEFAULT_QUEUE_CAPACITY: usize = 5000;

/// Producer half; cheap to clone and share between threads.
#[derive(Debug, Clone)]
pub struct QueueSender {
    inner: Sender<LogMessage>,
}

/// Consumer half, owned by the writer.
#[derive(Debug)]
pub struct QueueReceiver {
    inner: Receiver<LogMessage>,
}

/// Create a queue holding at most `capacity` messages.
pub fn bounded(capacity: usize) -> (QueueSender, QueueReceiver) {
    let (tx, rx) = crossbeam_channel::bounded(capacity);
    (QueueSender { inner: tx }, QueueReceiver { inner: rx })
}

impl QueueSender {
    /// Append `msg` without blocking.
    ///
    /// Returns `false` when the message was dropped, either because the
    /// queue is full or because the writer is gone.
    pub fn enqueue(&self, msg: LogMessage) -> bool {
        match self.inner.try_send(msg) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Number of messages currently waiting.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity().unwrap_or(0)
    }
}

impl QueueReceiver {
    /// Take the oldest message, if any.
    pub fn dequeue(&self) -> Option<LogMessage> {
        match self.inner.try_recv() {
            Ok(msg) => Some(msg),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
