use super::level_map::LEVEL_NAMES;
use thiserror::Error;

/// Top-level error type for the logging library.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Invalid log level '{level}'. Valid levels: {valid:?}", valid = LEVEL_NAMES)]
    InvalidLevel { level: String },

    #[error("Invalid priority {0}, expected 0..=7")]
    InvalidPriority(u8),

    #[error("No logger configured under name '{0}'")]
    UnknownLogger(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Writer error: {0}")]
    Writer(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for LogError {
    fn from(err: toml::de::Error) -> Self {
        LogError::Config(err.to_string())
    }
}
