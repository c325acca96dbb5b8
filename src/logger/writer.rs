//! Writers: the sinks a [`Logger`](super::Logger) hands events to.

use crate::domain::{LogError, LogEvent, Priority};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::Arc;

pub trait Writer: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    fn write(&self, event: &LogEvent) -> Result<(), LogError>;
}

/// Lets a writer through only events at least as severe as `max_priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityFilter {
    pub max_priority: Priority,
}

impl PriorityFilter {
    pub fn new(max_priority: Priority) -> Self {
        Self { max_priority }
    }

    pub fn accepts(&self, event: &LogEvent) -> bool {
        event.priority.is_at_least(self.max_priority)
    }
}

/// In-memory writer that records every event it receives.
///
/// Clones share the same event list, so a test can keep one handle and give
/// the other to a logger.
#[derive(Debug, Clone, Default)]
pub struct MockWriter {
    events: Arc<Mutex<Vec<LogEvent>>>,
}

impl MockWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Writer for MockWriter {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn write(&self, event: &LogEvent) -> Result<(), LogError> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamTarget {
    Stdout,
    #[default]
    Stderr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamFormat {
    /// `<timestamp> <NAME> (<n>): <message> [<extra as json>]`
    #[default]
    Simple,
    /// One serialized `LogEvent` per line
    Json,
}

/// Writes one line per event to a standard stream or any `io::Write` sink.
pub struct StreamWriter {
    sink: Mutex<Box<dyn Write + Send>>,
    format: StreamFormat,
}

impl StreamWriter {
    pub fn new(target: StreamTarget, format: StreamFormat) -> Self {
        let sink: Box<dyn Write + Send> = match target {
            StreamTarget::Stdout => Box::new(io::stdout()),
            StreamTarget::Stderr => Box::new(io::stderr()),
        };
        Self::with_sink(sink, format)
    }

    pub fn with_sink(sink: Box<dyn Write + Send>, format: StreamFormat) -> Self {
        Self {
            sink: Mutex::new(sink),
            format,
        }
    }

    pub fn render(&self, event: &LogEvent) -> Result<String, LogError> {
        match self.format {
            StreamFormat::Simple => {
                let mut line = format!(
                    "{} {} ({}): {}",
                    event.timestamp.to_rfc3339(),
                    event.priority_name,
                    event.priority.as_u8(),
                    event.message
                );
                if !event.extra.is_empty() {
                    let extra = serde_json::to_string(&event.extra)
                        .map_err(|e| LogError::Writer(format!("cannot encode extra: {e}")))?;
                    line.push(' ');
                    line.push_str(&extra);
                }
                Ok(line)
            }
            StreamFormat::Json => serde_json::to_string(event)
                .map_err(|e| LogError::Writer(format!("cannot encode event: {e}"))),
        }
    }
}

impl Writer for StreamWriter {
    fn name(&self) -> &'static str {
        "stream"
    }

    fn write(&self, event: &LogEvent) -> Result<(), LogError> {
        let line = self.render(event)?;
        let mut sink = self.sink.lock();
        writeln!(sink, "{line}")
            .and_then(|()| sink.flush())
            .map_err(|e| LogError::Writer(format!("stream write failed: {e}")))
    }
}

/// Re-emits events through `tracing` at the closest `tracing::Level`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWriter;

impl TracingWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn level_for(priority: Priority) -> tracing::Level {
        match priority {
            Priority::Emergency | Priority::Alert | Priority::Critical | Priority::Error => {
                tracing::Level::ERROR
            }
            Priority::Warning => tracing::Level::WARN,
            Priority::Notice | Priority::Info => tracing::Level::INFO,
            Priority::Debug => tracing::Level::DEBUG,
        }
    }
}

impl Writer for TracingWriter {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn write(&self, event: &LogEvent) -> Result<(), LogError> {
        let extra = serde_json::to_string(&event.extra)
            .map_err(|e| LogError::Writer(format!("cannot encode extra: {e}")))?;
        let priority = event.priority_name.as_str();
        let message = event.message.as_str();

        match Self::level_for(event.priority) {
            tracing::Level::ERROR => tracing::error!(priority, %extra, "{message}"),
            tracing::Level::WARN => tracing::warn!(priority, %extra, "{message}"),
            tracing::Level::INFO => tracing::info!(priority, %extra, "{message}"),
            _ => tracing::debug!(priority, %extra, "{message}"),
        }
        Ok(())
    }
}
