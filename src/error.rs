use thiserror::Error as ThisError;

/// Errors that can occur while constructing or running a logger
#[derive(ThisError, Debug)]
pub enum Error {
    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Level name is not one of DEBUG/INFO/WARNING/ERROR/FATAL.
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Initialization failed.
    #[error("Initialization error: {0}")]
    Init(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
