use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use crate::level::should_log;
use crate::queue::{QueueSender, bounded};
use crate::rotation::{ManagedFile, RotationPolicy};
use crate::writer::{Streams, WriterLoop};
use crate::{CallSite, Error, LogLevel, LogMessage, LoggerConfig, Result};

/// An asynchronous file logger.
///
/// Calls format the message, queue it and return immediately. A background
/// thread owns both files, writing every line to `<path>/<name>` and lines at
/// ERROR and above to `<path>/<name>.err` as well. Either file is moved aside
/// to `<file>.bak<YYYYMMDDHHMMSSmmm>` once it reaches the configured size.
///
/// Messages are dropped when the queue is full, and anything still queued
/// at [`close`](Self::close) is lost.
#[derive(Debug)]
pub struct FileLogger {
    level: LogLevel,
    sender: QueueSender,
    shutdown: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl FileLogger {
    /// Open both files and start the writer thread.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The level name is not recognised
    /// - The configuration is otherwise invalid
    /// - Either file cannot be opened
    /// - The writer thread cannot be spawned
    pub fn new(config: &LoggerConfig) -> Result<Self> {
        config.validate()?;
        let level = config.min_level()?;

        if !config.path.as_os_str().is_empty() {
            std::fs::create_dir_all(&config.path)?;
        }

        let streams = Streams {
            primary: ManagedFile::open(config.log_path())?,
            errors: ManagedFile::open(config.error_log_path())?,
        };

        let (sender, receiver) = bounded(config.queue_capacity);
        let shutdown = Arc::new(AtomicBool::new(false));
        let writer = WriterLoop::new(
            streams,
            RotationPolicy::new(config.max_size),
            receiver,
            Arc::clone(&shutdown),
        );
        let worker = writer
            .spawn()
            .map_err(|e| Error::Init(format!("failed to spawn writer thread: {}", e)))?;

        tracing::debug!(
            path = %config.log_path().display(),
            level = %level,
            max_size = config.max_size,
            queue_capacity = config.queue_capacity,
            "file logger opened"
        );

        Ok(Self {
            level,
            sender,
            shutdown,
            worker: Some(worker),
        })
    }

    /// Minimum level this logger accepts.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        should_log(self.level, level)
    }

    /// Queue one message. Never blocks and never fails; messages below the
    /// minimum level or arriving at a full queue are dropped.
    pub fn log(&self, level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>) {
        if !self.is_enabled(level) {
            return;
        }
        self.sender.enqueue(LogMessage::new(level, call_site, args));
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, CallSite::caller(), args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, CallSite::caller(), args);
    }

    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warning, CallSite::caller(), args);
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, CallSite::caller(), args);
    }

    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Fatal, CallSite::caller(), args);
    }

    /// Stop the writer and release both files.
    ///
    /// Does not drain the queue. Calling it again is a no-op.
    pub fn close(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        self.shutdown.store(true, Ordering::Release);
        worker.thread().unpark();
        if worker.join().is_err() {
            tracing::warn!("log writer thread panicked");
        }
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::QueueReceiver;

    /// A logger whose writer is never started, so queued messages stay put.
    fn paused(level: LogLevel, capacity: usize) -> (FileLogger, QueueReceiver) {
        let (sender, receiver) = bounded(capacity);
        let logger = FileLogger {
            level,
            sender,
            shutdown: Arc::new(AtomicBool::new(false)),
            worker: None,
        };
        (logger, receiver)
    }

    #[test]
    fn test_gate_with_warning_minimum() {
        let (logger, rx) = paused(LogLevel::Warning, 16);

        logger.debug(format_args!("d"));
        logger.info(format_args!("i"));
        assert_eq!(rx.len(), 0);

        logger.warning(format_args!("w"));
        logger.error(format_args!("e"));
        logger.fatal(format_args!("f"));
        assert_eq!(rx.len(), 3);

        let levels: Vec<_> = std::iter::from_fn(|| rx.dequeue())
            .map(|m| m.level())
            .collect();
        assert_eq!(
            levels,
            vec![LogLevel::Warning, LogLevel::Error, LogLevel::Fatal]
        );
    }

    #[test]
    fn test_overflow_keeps_oldest_capacity_messages() {
        let capacity = 8;
        let (logger, rx) = paused(LogLevel::Debug, capacity);

        for i in 0..=capacity {
            logger.info(format_args!("msg {}", i));
        }

        assert_eq!(rx.len(), capacity);
        let first = rx.dequeue().unwrap();
        assert_eq!(first.message(), "msg 0");
    }

    #[test]
    fn test_methods_record_caller_location() {
        let (logger, rx) = paused(LogLevel::Debug, 4);
        let line = line!() + 1;
        logger.warning(format_args!("here"));

        let msg = rx.dequeue().unwrap();
        assert_eq!(msg.call_site().file, "logger.rs");
        assert_eq!(msg.call_site().line, line);
    }

    #[test]
    fn test_close_without_worker_is_noop() {
        let (mut logger, _rx) = paused(LogLevel::Info, 1);
        logger.close();
        logger.close();
    }

    #[test]
    fn test_new_rejects_bad_level() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggerConfig::new("app.log")
            .with_path(dir.path())
            .with_level("verbose");
        assert!(matches!(
            FileLogger::new(&config),
            Err(Error::InvalidLevel(_))
        ));
        assert!(!dir.path().join("app.log").exists());
    }
}
