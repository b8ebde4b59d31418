//! Builder pattern for constructing a [`FileLogger`].
//!
//! # Example
//!
//! ```rust,no_run
//! let logger = splitlog::builder("app.log")
//!     .with_path("/var/log/app")
//!     .with_level("warning")
//!     .with_max_size(10 * 1024 * 1024)
//!     .build()
//!     .expect("Failed to open log files");
//!
//! splitlog::warning!(logger, "disk usage at {}%", 91);
//! ```

use std::path::PathBuf;

use crate::{FileLogger, LoggerConfig, Result};

/// A builder for configuring and opening a [`FileLogger`].
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    /// Create a builder for log file `name` with default configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: LoggerConfig::new(name),
        }
    }

    /// Create a LoggerBuilder from an existing configuration.
    pub fn from_config(config: LoggerConfig) -> Self {
        Self { config }
    }

    /// Set the minimum level ("debug", "info", "warning", "error", "fatal").
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config = self.config.with_level(level);
        self
    }

    /// Set the directory the log files live in.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = self.config.with_path(path);
        self
    }

    /// Set the rotation threshold in bytes.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.config = self.config.with_max_size(max_size);
        self
    }

    /// Set how many messages may wait for the writer.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.with_queue_capacity(capacity);
        self
    }

    /// Get the current configuration without opening anything.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Open the log files and start the writer.
    ///
    /// # Errors
    ///
    /// See [`FileLogger::new`].
    pub fn build(self) -> Result<FileLogger> {
        FileLogger::new(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogLevel;

    #[test]
    fn test_builder_new() {
        let builder = LoggerBuilder::new("app.log");
        assert_eq!(builder.config(), &LoggerConfig::new("app.log"));
    }

    #[test]
    fn test_builder_chaining() {
        let builder = LoggerBuilder::new("app.log")
            .with_level("error")
            .with_path("/tmp/x")
            .with_max_size(4096)
            .with_queue_capacity(10);

        let config = builder.config();
        assert_eq!(config.level, "error");
        assert_eq!(config.path, PathBuf::from("/tmp/x"));
        assert_eq!(config.max_size, 4096);
        assert_eq!(config.queue_capacity, 10);
    }

    #[test]
    fn test_builder_from_config() {
        let original = LoggerConfig::new("svc.log").with_level("debug");
        let builder = LoggerBuilder::from_config(original.clone());
        assert_eq!(builder.config(), &original);
    }

    #[test]
    fn test_build_opens_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut logger = LoggerBuilder::new("app.log")
            .with_path(dir.path().join("nested"))
            .with_level("fatal")
            .build()
            .unwrap();

        assert_eq!(logger.level(), LogLevel::Fatal);
        assert!(dir.path().join("nested/app.log").exists());
        assert!(dir.path().join("nested/app.log.err").exists());
        logger.close();
    }

    #[test]
    fn test_build_fails_on_invalid_level() {
        let dir = tempfile::tempdir().unwrap();
        let result = LoggerBuilder::new("app.log")
            .with_path(dir.path())
            .with_level("chatty")
            .build();
        assert!(result.is_err());
    }
}
