use super::priority::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Structured fields attached to a log call.
pub type Context = HashMap<String, serde_json::Value>;

/// A single log event as seen by processors and writers.
///
/// Events are built per call by the logger and dropped once every writer has
/// seen them; nothing in this crate retains them except the in-memory
/// `MockWriter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub priority: Priority,
    pub priority_name: String,
    pub message: String,
    #[serde(default)]
    pub extra: Context,
}

impl LogEvent {
    pub fn new(priority: Priority, message: impl Into<String>, extra: Context) -> Self {
        Self::at(Utc::now(), priority, message, extra)
    }

    pub fn at(
        timestamp: DateTime<Utc>,
        priority: Priority,
        message: impl Into<String>,
        extra: Context,
    ) -> Self {
        Self {
            timestamp,
            priority,
            priority_name: priority.event_name().to_string(),
            message: message.into(),
            extra,
        }
    }
}
