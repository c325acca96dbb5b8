//! The crate's own diagnostics.
//!
//! Library code reports through `tracing` macros; binaries call
//! [`setup_diagnostics`] once to install an `EnvFilter` + `fmt` subscriber.
//! This is independent from the [`Logger`](crate::logger::Logger) engine,
//! which only emits through `tracing` when a `TracingWriter` is configured.

use clap::ValueEnum;
use std::sync::OnceLock;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Error, Debug)]
pub enum DiagnosticsError {
    #[error("Invalid diagnostics filter '{filter}': {details}")]
    InvalidFilter { filter: String, details: String },

    #[error("Diagnostics initialization failed: {details}")]
    InitFailed { details: String },
}

/// Verbosity of the crate's own diagnostics output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DiagnosticsLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl DiagnosticsLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticsLevel::Error => "error",
            DiagnosticsLevel::Warn => "warn",
            DiagnosticsLevel::Info => "info",
            DiagnosticsLevel::Debug => "debug",
            DiagnosticsLevel::Trace => "trace",
        }
    }
}

/// Filter string with `default_level` first and `RUST_LOG`-style
/// `target=level` directives after it.
pub fn filter_string(default_level: DiagnosticsLevel, directives: &[&str]) -> String {
    std::iter::once(default_level.as_str())
        .chain(directives.iter().map(|d| d.trim()))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn build_filter(
    default_level: DiagnosticsLevel,
    directives: &[&str],
) -> Result<EnvFilter, DiagnosticsError> {
    let filter = filter_string(default_level, directives);
    EnvFilter::try_new(&filter).map_err(|e| DiagnosticsError::InvalidFilter {
        details: e.to_string(),
        filter,
    })
}

/// Install diagnostics once per process.
///
/// Later calls return the outcome of the first one.
pub fn setup_diagnostics(
    default_level: DiagnosticsLevel,
    directives: &[&str],
) -> Result<(), DiagnosticsError> {
    static OUTCOME: OnceLock<Result<(), String>> = OnceLock::new();

    OUTCOME
        .get_or_init(|| install(default_level, directives).map_err(|e| e.to_string()))
        .clone()
        .map_err(|details| DiagnosticsError::InitFailed { details })
}

fn install(default_level: DiagnosticsLevel, directives: &[&str]) -> Result<(), DiagnosticsError> {
    let subscriber = tracing_subscriber::registry()
        .with(build_filter(default_level, directives)?)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact(),
        );

    tracing::subscriber::set_global_default(subscriber).map_err(|e| {
        DiagnosticsError::InitFailed {
            details: format!("failed to set global subscriber: {e}"),
        }
    })
}
