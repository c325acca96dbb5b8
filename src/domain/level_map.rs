//! Level name <-> priority mapping table.
//!
//! The generic leveled interface names its levels with lowercase tokens
//! (`"error"`, `"info"`, ...). This table is the only place those tokens are
//! tied to a [`Priority`]; it is a `static` and never changes at runtime.

use super::error::LogError;
use super::priority::Priority;

/// Closed vocabulary of level names, most severe first.
pub const LEVEL_NAMES: [&str; 8] = [
    "emergency",
    "alert",
    "critical",
    "error",
    "warning",
    "notice",
    "info",
    "debug",
];

static LEVEL_TABLE: [(&str, Priority); 8] = [
    ("emergency", Priority::Emergency),
    ("alert", Priority::Alert),
    ("critical", Priority::Critical),
    ("error", Priority::Error),
    ("warning", Priority::Warning),
    ("notice", Priority::Notice),
    ("info", Priority::Info),
    ("debug", Priority::Debug),
];

/// Resolve a level name to its priority.
///
/// Matching is exact. Any name outside [`LEVEL_NAMES`] yields
/// [`LogError::InvalidLevel`].
pub fn priority_of(name: &str) -> Result<Priority, LogError> {
    LEVEL_TABLE
        .iter()
        .find(|(level, _)| *level == name)
        .map(|(_, priority)| *priority)
        .ok_or_else(|| LogError::InvalidLevel {
            level: name.to_string(),
        })
}

pub fn level_name_of(priority: Priority) -> &'static str {
    // Table rows are laid out by discriminant.
    LEVEL_TABLE[priority.as_u8() as usize].0
}
