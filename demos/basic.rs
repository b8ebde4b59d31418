//! Basic file logging example.
//!
//! Writes a few lines to `./logs/basic.log`; the ERROR line is also copied
//! to `./logs/basic.log.err`.

use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    splitlog::init_diagnostics("warn", splitlog::DiagnosticFormat::Text, None)?;

    let mut logger = splitlog::builder("basic.log")
        .with_path("logs")
        .with_level("info")
        .build()?;

    splitlog::debug!(logger, "This is a debug message (filtered out)");
    splitlog::info!(logger, "This is an info message");
    splitlog::warning!(logger, "This is a warning message");
    splitlog::error!(logger, "This is an error message: code {}", 500);

    // Give the writer a chance to drain before closing; close does not.
    std::thread::sleep(Duration::from_secs(1));
    logger.close();

    Ok(())
}
