use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::queue::DEFAULT_QUEUE_CAPACITY;
use crate::{Error, LogLevel, Result};

/// Parse a size string with an optional unit (K/M/G, case-insensitive).
/// A bare number is a byte count.
fn parse_size(s: &str) -> std::result::Result<u64, String> {
    let s = s.trim();
    let Some(last) = s.chars().last() else {
        return Err("empty size string".to_string());
    };

    let (num_str, multiplier) = if last.is_alphabetic() {
        let multiplier = match last.to_ascii_uppercase() {
            'K' => 1024,
            'M' => 1024 * 1024,
            'G' => 1024 * 1024 * 1024,
            unit => return Err(format!("invalid unit: {}, supported: K/M/G", unit)),
        };
        (&s[..s.len() - last.len_utf8()], multiplier)
    } else {
        (s, 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| "size too large".to_string())
}

/// Size value that can be a number or string with units.
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeValue {
    Number(u64),
    String(String),
}

fn deserialize_size<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match SizeValue::deserialize(deserializer)? {
        SizeValue::Number(n) => Ok(n),
        SizeValue::String(s) => parse_size(&s).map_err(de::Error::custom),
    }
}

/// Configuration for a [`FileLogger`](crate::FileLogger)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Minimum level name (DEBUG, INFO, WARNING, ERROR or FATAL, any case)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory holding the log files
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// File name of the primary log; the error stream appends `.err`
    pub name: String,
    /// Size in bytes at which a file is rotated.
    /// Can be a number of bytes or a string with units (K/M/G, case-insensitive).
    /// Examples: 1048576, "512K", "10M", "1g"
    #[serde(default = "default_max_size", deserialize_with = "deserialize_size")]
    pub max_size: u64,
    /// Number of messages buffered before new ones are dropped
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl LoggerConfig {
    /// Create a config for `name` in the current directory with defaults
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            level: default_log_level(),
            path: default_path(),
            name: name.into(),
            max_size: default_max_size(),
            queue_capacity: default_queue_capacity(),
        }
    }

    /// Set minimum level name
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set log directory
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set log file name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set rotation threshold in bytes
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set queue capacity
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Parsed minimum level.
    pub fn min_level(&self) -> Result<LogLevel> {
        self.level.parse()
    }

    /// `<path>/<name>`
    pub fn log_path(&self) -> PathBuf {
        self.path.join(&self.name)
    }

    /// `<path>/<name>.err`
    pub fn error_log_path(&self) -> PathBuf {
        let mut name = self.log_path().into_os_string();
        name.push(".err");
        PathBuf::from(name)
    }

    /// Check every field before any file is touched.
    pub fn validate(&self) -> Result<()> {
        self.min_level()?;

        if self.name.trim().is_empty() {
            return Err(Error::Config("log file name must not be empty".to_string()));
        }
        if Path::new(&self.name).file_name().is_none_or(|n| n != self.name.as_str()) {
            return Err(Error::Config(format!(
                "log file name must not contain a directory: {}",
                self.name
            )));
        }
        if self.max_size == 0 {
            return Err(Error::Config("max_size must be greater than zero".to_string()));
        }
        if self.queue_capacity == 0 {
            return Err(Error::Config(
                "queue_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_size() -> u64 {
    10 * 1024 * 1024
}

fn default_queue_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}
