pub mod cli;

pub use cli::Cli;

use crate::adapter::{LevelAdapter, LevelLogger};
use crate::factory::{LoggerConfig, LoggerFactory};
use crate::logger::{Logger, MockWriter};
use crate::telemetry::setup_diagnostics;
use anyhow::{Context as _, bail};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info};

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn load_factory(cli: &Cli) -> anyhow::Result<LoggerFactory> {
    match &cli.config {
        Some(path) => LoggerFactory::from_file(path, cli.config_key.as_str())
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(LoggerFactory::new(cli.config_key.as_str())),
    }
}

/// Logger used by `--dry-run`: the configured processors (if any) and a
/// single in-memory writer.
fn dry_run_logger(factory: &LoggerFactory, name: &str) -> anyhow::Result<(Logger, MockWriter)> {
    let processors = if factory.can_create(name) {
        factory.logger_config(name)?.processors
    } else {
        Vec::new()
    };
    let mut logger = LoggerConfig {
        writers: Vec::new(),
        processors,
    }
    .build()?;

    let writer = MockWriter::new();
    logger.add_writer(writer.clone());
    Ok((logger, writer))
}

/// Build the selected logger and dispatch the message through the level
/// adapter. In dry-run mode the resulting events are printed to `out` as
/// JSON lines.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let context = cli.context()?;
    let factory = load_factory(cli)?;

    if cli.dry_run {
        let (logger, writer) = dry_run_logger(&factory, &cli.logger)?;
        LevelAdapter::new(&logger).log(&cli.level, &cli.message, &context)?;
        for event in writer.events() {
            writeln!(out, "{}", serde_json::to_string(&event)?)?;
        }
        return Ok(());
    }

    if !factory.can_create(&cli.logger) {
        bail!(
            "No logger named '{}' under '[{}]'",
            cli.logger,
            factory.config_key()
        );
    }

    let logger = factory.create(&cli.logger)?;
    LevelAdapter::new(&logger).log(&cli.level, &cli.message, &context)?;
    info!(logger = %cli.logger, level = %cli.level, "Message dispatched");
    Ok(())
}

// Main entry point for the binary
pub fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_diagnostics(cli.diagnostics, &[]) {
        eprintln!("Warning: {e}");
    }

    let stdout = std::io::stdout();
    match execute(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("rask-logger {} failed: {:#}", get_version(), e);
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
