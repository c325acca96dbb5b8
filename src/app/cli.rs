use crate::domain::{Context, LogError};
use crate::factory::{CONFIG_FILE_ENV, DEFAULT_CONFIG_KEY};
use crate::telemetry::DiagnosticsLevel;
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;

/// Send one message through a configured logger.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Logger configuration file (TOML)
    #[arg(long, env = CONFIG_FILE_ENV)]
    pub config: Option<PathBuf>,

    /// Root key holding the logger sections
    #[arg(long, env = "RASK_LOGGER_CONFIG_KEY", default_value = DEFAULT_CONFIG_KEY)]
    pub config_key: String,

    /// Name of the logger section to build
    #[arg(long, env = "RASK_LOGGER_NAME", default_value = "app")]
    pub logger: String,

    /// Verbosity of rask-logger's own diagnostics
    #[arg(long, env = "RASK_LOGGER_DIAGNOSTICS", default_value = "warn")]
    pub diagnostics: DiagnosticsLevel,

    /// Record the event in memory and print it as JSON instead of using the
    /// configured writers
    #[arg(long)]
    pub dry_run: bool,

    /// Structured field attached to the message, as key=value
    #[arg(long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    /// Level name (emergency, alert, critical, error, warning, notice, info, debug)
    pub level: String,

    /// Message text
    pub message: String,
}

impl Cli {
    /// Collect `--field` pairs into a context.
    ///
    /// Values are read as JSON when they parse as JSON (`28`, `true`,
    /// `"quoted"`), otherwise kept as plain strings.
    pub fn context(&self) -> Result<Context, LogError> {
        self.fields.iter().map(|field| parse_field(field)).collect()
    }
}

pub fn parse_field(field: &str) -> Result<(String, Value), LogError> {
    let Some((key, raw)) = field.split_once('=') else {
        return Err(LogError::Config(format!(
            "Invalid field '{field}'. Expected: 'key=value'"
        )));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(LogError::Config(format!("Empty key in field '{field}'")));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
