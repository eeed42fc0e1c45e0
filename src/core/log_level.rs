//! Log level definitions
//!
//! Levels are sent to the collector as their numeric code. Only the codes a
//! builder can select are modelled.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Panic = 5,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Panic,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Panic => "PANIC",
        }
    }

    /// Numeric code written to the `level` field
    #[inline]
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "PANIC" => Ok(LogLevel::Panic),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        LogLevel::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown level code {}", code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_codes() {
        assert_eq!(LogLevel::Debug.code(), 0);
        assert_eq!(LogLevel::Info.code(), 1);
        assert_eq!(LogLevel::Warn.code(), 2);
        assert_eq!(LogLevel::Error.code(), 3);
        assert_eq!(LogLevel::Fatal.code(), 4);
        assert_eq!(LogLevel::Panic.code(), 5);
        assert_eq!(LogLevel::default(), LogLevel::Debug);
    }

    #[test]
    fn test_from_code() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_code(level.code()), Some(level));
        }
        assert_eq!(LogLevel::from_code(6), None);
        assert_eq!(LogLevel::from_code(7), None);
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&LogLevel::Fatal).unwrap(), "4");
        let level: LogLevel = serde_json::from_str("2").unwrap();
        assert_eq!(level, LogLevel::Warn);
        assert!(serde_json::from_str::<LogLevel>("9").is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Panic".parse::<LogLevel>(), Ok(LogLevel::Panic));
        assert!("trace".parse::<LogLevel>().is_err());
    }
}
