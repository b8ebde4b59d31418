use std::fmt;
use std::panic::Location;
use std::path::Path;

use time::OffsetDateTime;
use time::macros::format_description;

use crate::LogLevel;

/// Where a log call was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    /// Path of the enclosing function, or `"?"` when unknown.
    pub function: &'static str,
    /// Base name of the source file.
    pub file: &'static str,
    /// Line number within `file`.
    pub line: u32,
}

impl CallSite {
    /// Build a call site from raw `file!()`-style input, keeping only the base name.
    pub fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file: base_name(file),
            line,
        }
    }

    /// Call site of the caller, as seen through `#[track_caller]`.
    ///
    /// Location data carries no function name, so `function` is `"?"`.
    /// Use the [`call_site!`](crate::call_site) macro when it matters.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new("?", location.file(), location.line())
    }
}

fn base_name(file: &'static str) -> &'static str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

/// Current wall-clock time, local if the offset can be determined.
pub(crate) fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Render `YYYY-MM-DD HH:MM:SS` for the line prefix.
pub(crate) fn line_timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ))
    .unwrap_or_default()
}

/// Render `YYYYMMDDHHMMSSmmm` for rotated file suffixes.
pub(crate) fn backup_timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!(
        "[year][month][day][hour][minute][second][subsecond digits:3]"
    ))
    .unwrap_or_default()
}

/// One log call, fully rendered and ready to queue.
///
/// Fields are private so the envelope cannot change after construction;
/// it moves from the caller into the queue and then into the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    level: LogLevel,
    message: String,
    call_site: CallSite,
    timestamp: String,
}

impl LogMessage {
    /// Format `args` and stamp the envelope with the current time.
    pub fn new(level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>) -> Self {
        Self::at(level, call_site, args.to_string(), now())
    }

    /// Build an envelope with an explicit timestamp.
    pub fn at(
        level: LogLevel,
        call_site: CallSite,
        message: impl Into<String>,
        at: OffsetDateTime,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            call_site,
            timestamp: line_timestamp(at),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn call_site(&self) -> &CallSite {
        &self.call_site
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Render the newline-terminated line written to the log files:
    /// `[timestamp] [LEVEL] [file:function:line] message`.
    pub fn render(&self) -> String {
        format!(
            "[{}] [{}] [{}:{}:{}] {}\n",
            self.timestamp,
            self.level,
            self.call_site.file,
            self.call_site.function,
            self.call_site.line,
            self.message
        )
    }
}
