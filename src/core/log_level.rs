//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record. Higher values are more severe.
///
/// `NotSet` is the lowest threshold: a channel or sink at `NotSet` admits
/// every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "LevelRepr", into = "u8")]
#[repr(u8)]
pub enum LogLevel {
    #[default]
    NotSet = 0,
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::NotSet,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::NotSet => "NOTSET",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether a record at `level` passes this threshold.
    #[inline]
    pub fn admits(self, level: LogLevel) -> bool {
        level >= self
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<i64> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: i64) -> Result<Self, LoggerError> {
        LogLevel::ALL
            .into_iter()
            .find(|level| i64::from(level.as_u8()) == value)
            .ok_or_else(|| {
                LoggerError::config(
                    "LOGLVL",
                    format!("{} is not one of 0, 10, 20, 30, 40, 50", value),
                )
            })
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return LogLevel::try_from(value);
        }

        match s.to_uppercase().as_str() {
            "NOTSET" => Ok(LogLevel::NotSet),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(LoggerError::config(
                "LOGLVL",
                format!("Invalid log level: '{}'", s),
            )),
        }
    }
}

/// Wire form accepted for a level in configuration: a number or a name.
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Number(i64),
    Name(String),
}

impl TryFrom<LevelRepr> for LogLevel {
    type Error = LoggerError;

    fn try_from(repr: LevelRepr) -> Result<Self, LoggerError> {
        match repr {
            LevelRepr::Number(value) => LogLevel::try_from(value),
            LevelRepr::Name(name) => name.parse(),
        }
    }
}
