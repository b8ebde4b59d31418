//! # Splitlog
//!
//! An asynchronous file logger that rotates by size and keeps a separate
//! error stream.
//!
//! ## Features
//!
//! - Non-blocking log calls: messages go into a bounded queue and are
//!   dropped, not waited on, when it is full
//! - A single background writer owns every file handle
//! - Size-based rotation to `<file>.bak<YYYYMMDDHHMMSSmmm>`
//! - ERROR and FATAL lines are copied into `<file>.err`
//!
//! ## Example
//!
//! ```rust,no_run
//! use splitlog::{FileLogger, LoggerConfig};
//!
//! let config = LoggerConfig::new("app.log")
//!     .with_path("/var/log/app")
//!     .with_level("info")
//!     .with_max_size(1024 * 1024);
//! let mut logger = FileLogger::new(&config)?;
//!
//! splitlog::info!(logger, "hello {}", 1);
//! logger.error(format_args!("request {} failed", 7));
//!
//! logger.close();
//! # Ok::<(), splitlog::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod level;
pub mod logger;
mod macros;
pub mod message;
pub mod queue;
pub mod rotation;
pub mod writer;

pub use builder::LoggerBuilder;
pub use config::LoggerConfig;
pub use diagnostics::{DiagnosticFormat, init_diagnostics};
pub use error::{Error, Result};
pub use level::{LogLevel, should_log};
pub use logger::FileLogger;
pub use message::{CallSite, LogMessage};
pub use queue::DEFAULT_QUEUE_CAPACITY;
pub use rotation::RotationPolicy;

/// Start building a logger that writes to `name`.
pub fn builder(name: impl Into<String>) -> LoggerBuilder {
    LoggerBuilder::new(name)
}
