//! Local diagnostic output for the logger's own failures.
//!
//! Stat, rename and reopen problems are reported as `tracing` events rather
//! than written into the managed files. Applications that already install a
//! subscriber see them there; otherwise [`init_diagnostics`] routes them to
//! stderr.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Error, Result};

/// Output format for diagnostic events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticFormat {
    #[default]
    Text,
    Json,
}

/// Install a stderr subscriber for this crate's diagnostic events.
///
/// `RUST_LOG` wins if set; otherwise `cli_verbose` raises this crate's
/// verbosity above `level`.
///
/// # Errors
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init_diagnostics(
    level: &str,
    format: DiagnosticFormat,
    cli_verbose: Option<u8>,
) -> Result<()> {
    let spec = effective_log_spec(level, cli_verbose);
    let env_filter = EnvFilter::try_new(&spec).map_err(|e| Error::Init(e.to_string()))?;

    let fmt_layer_builder = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(true);

    let fmt_layer = match format {
        DiagnosticFormat::Json => fmt_layer_builder.json().boxed(),
        DiagnosticFormat::Text => fmt_layer_builder.boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::Init(e.to_string()))
}

/// Determine the effective filter, considering `RUST_LOG` and verbosity overrides.
fn effective_log_spec(level: &str, cli_verbose: Option<u8>) -> String {
    if let Ok(rust_log) = std::env::var("RUST_LOG")
        && !rust_log.is_empty()
    {
        return rust_log;
    }

    let level = if level.is_empty() { "warn" } else { level };

    match cli_verbose {
        None => format!("{},splitlog={}", level, level),
        Some(0) => level.to_string(),
        Some(1) => format!("{},splitlog=debug", level),
        Some(2) => format!("{},splitlog=trace", level),
        Some(_) => "trace".to_string(),
    }
}
