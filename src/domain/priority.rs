use super::error::LogError;
use super::level_map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Severity of a log event, ordered from most to least severe.
///
/// The discriminants are fixed: a lower value is a higher severity, so
/// `Priority::Emergency < Priority::Debug`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// System is unusable
    Emergency = 0,
    /// Action must be taken immediately
    Alert = 1,
    /// Critical conditions
    Critical = 2,
    /// Error conditions
    Error = 3,
    /// Warning conditions
    Warning = 4,
    /// Normal but significant condition
    Notice = 5,
    /// Informational messages
    Info = 6,
    /// Debug-level messages
    Debug = 7,
}

impl Priority {
    /// Every priority, most severe first.
    pub const ALL: [Priority; 8] = [
        Priority::Emergency,
        Priority::Alert,
        Priority::Critical,
        Priority::Error,
        Priority::Warning,
        Priority::Notice,
        Priority::Info,
        Priority::Debug,
    ];

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Priority::Emergency),
            1 => Some(Priority::Alert),
            2 => Some(Priority::Critical),
            3 => Some(Priority::Error),
            4 => Some(Priority::Warning),
            5 => Some(Priority::Notice),
            6 => Some(Priority::Info),
            7 => Some(Priority::Debug),
            _ => None,
        }
    }

    /// Short name written into log events (`EMERG`, `ERR`, ...).
    pub const fn event_name(self) -> &'static str {
        match self {
            Priority::Emergency => "EMERG",
            Priority::Alert => "ALERT",
            Priority::Critical => "CRIT",
            Priority::Error => "ERR",
            Priority::Warning => "WARN",
            Priority::Notice => "NOTICE",
            Priority::Info => "INFO",
            Priority::Debug => "DEBUG",
        }
    }

    /// Level name of this priority in the generic vocabulary.
    pub fn level_name(self) -> &'static str {
        level_map::level_name_of(self)
    }

    pub fn from_level_name(name: &str) -> Option<Self> {
        level_map::priority_of(name).ok()
    }

    /// Whether `self` is at least as severe as `threshold`.
    #[inline]
    pub fn is_at_least(self, threshold: Priority) -> bool {
        self <= threshold
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.level_name())
    }
}

impl FromStr for Priority {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        level_map::priority_of(s)
    }
}

impl TryFrom<u8> for Priority {
    type Error = LogError;

    fn try_from(value: u8) -> Result<Self, LogError> {
        Priority::from_u8(value).ok_or(LogError::InvalidPriority(value))
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.as_u8()
    }
}

impl Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.level_name())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Emergency < Priority::Alert);
        assert!(Priority::Alert < Priority::Critical);
        assert!(Priority::Critical < Priority::Error);
        assert!(Priority::Error < Priority::Warning);
        assert!(Priority::Warning < Priority::Notice);
        assert!(Priority::Notice < Priority::Info);
        assert!(Priority::Info < Priority::Debug);
    }

    #[test]
    fn test_priority_values() {
        for (expected, priority) in Priority::ALL.iter().enumerate() {
            assert_eq!(priority.as_u8() as usize, expected);
        }
    }

    #[test]
    fn test_priority_from_u8() {
        assert_eq!(Priority::from_u8(0), Some(Priority::Emergency));
        assert_eq!(Priority::from_u8(3), Some(Priority::Error));
        assert_eq!(Priority::from_u8(7), Some(Priority::Debug));
        assert_eq!(Priority::from_u8(8), None);
    }

    #[test]
    fn test_priority_try_from_rejects_out_of_range() {
        let err = Priority::try_from(42u8).unwrap_err();
        assert!(matches!(err, LogError::InvalidPriority(42)));
    }

    #[test]
    fn test_priority_integer_conversions() {
        assert_eq!(u8::from(Priority::Error), 3);
        assert_eq!(Priority::try_from(3u8).unwrap(), Priority::Error);
        for priority in Priority::ALL {
            assert_eq!(Priority::try_from(u8::from(priority)).unwrap(), priority);
        }
    }

    #[test]
    fn test_priority_from_level_name() {
        assert_eq!(Priority::from_level_name("error"), Some(Priority::Error));
        assert_eq!(Priority::from_level_name("emergency"), Some(Priority::Emergency));
        assert_eq!(Priority::from_level_name("ERROR"), None);
        assert_eq!(Priority::from_level_name("trace"), None);
    }

    #[test]
    fn test_priority_event_names() {
        assert_eq!(Priority::Emergency.event_name(), "EMERG");
        assert_eq!(Priority::Critical.event_name(), "CRIT");
        assert_eq!(Priority::Error.event_name(), "ERR");
        assert_eq!(Priority::Warning.event_name(), "WARN");
    }

    #[test]
    fn test_priority_display_uses_level_name() {
        assert_eq!(Priority::Warning.to_string(), "warning");
        assert_eq!(format!("{}", Priority::Emergency), "emergency");
    }

    #[test]
    fn test_priority_is_at_least() {
        assert!(Priority::Error.is_at_least(Priority::Warning));
        assert!(Priority::Warning.is_at_least(Priority::Warning));
        assert!(!Priority::Info.is_at_least(Priority::Warning));
    }

    #[test]
    fn test_priority_serde_as_level_name() {
        let json = serde_json::to_string(&Priority::Notice).unwrap();
        assert_eq!(json, "\"notice\"");

        let parsed: Priority = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(parsed, Priority::Critical);

        assert!(serde_json::from_str::<Priority>("\"fatal\"").is_err());
    }
}
