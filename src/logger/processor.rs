//! Processors transform an event before any writer sees it.

use crate::domain::{LogError, LogEvent};
use regex::{Captures, Regex};
use serde_json::Value;

pub trait Processor: Send + Sync {
    fn name(&self) -> &'static str;

    fn process(&self, event: LogEvent) -> LogEvent;
}

const PLACEHOLDER_PATTERN: &str = r"\{([A-Za-z0-9_.]+)\}";

/// Interpolates `{key}` placeholders in the message from the event context.
///
/// Placeholders without a matching key are left as written.
#[derive(Debug, Clone)]
pub struct PlaceholderProcessor {
    pattern: Regex,
}

impl PlaceholderProcessor {
    pub fn new() -> Result<Self, LogError> {
        let pattern = Regex::new(PLACEHOLDER_PATTERN).map_err(|e| {
            LogError::Config(format!("invalid placeholder pattern '{PLACEHOLDER_PATTERN}': {e}"))
        })?;
        Ok(Self { pattern })
    }

    fn render(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Bool(_) | Value::Number(_) => value.to_string(),
            Value::Array(_) => "[array]".to_string(),
            Value::Object(_) => "[object]".to_string(),
        }
    }
}

impl Processor for PlaceholderProcessor {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn process(&self, mut event: LogEvent) -> LogEvent {
        if event.extra.is_empty() || !event.message.contains('{') {
            return event;
        }

        let replaced = self
            .pattern
            .replace_all(&event.message, |caps: &Captures<'_>| {
                match event.extra.get(&caps[1]) {
                    Some(value) => Self::render(value),
                    None => caps[0].to_string(),
                }
            })
            .into_owned();
        event.message = replaced;
        event
    }
}

/// Truncates messages longer than `max_length` characters.
#[derive(Debug, Clone, Copy)]
pub struct MessageLimitProcessor {
    max_length: usize,
}

impl MessageLimitProcessor {
    pub fn new(max_length: usize) -> Result<Self, LogError> {
        if max_length == 0 {
            return Err(LogError::Config(
                "Message limit must be greater than 0".to_string(),
            ));
        }
        Ok(Self { max_length })
    }
}

impl Processor for MessageLimitProcessor {
    fn name(&self) -> &'static str {
        "message_limit"
    }

    fn process(&self, mut event: LogEvent) -> LogEvent {
        if let Some((cut, _)) = event.message.char_indices().nth(self.max_length) {
            event.message.truncate(cut);
        }
        event
    }
}
