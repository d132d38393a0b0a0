//! Facade configuration
//!
//! A [`LoggerConfig`] has three optional fields. It can be read from a
//! mapping with the keys `LOGNAME`, `LOGLVL` and `LOGFILE`, or filled in
//! field by field. Two configs combine with [`LoggerConfig::merge`], where
//! the fields set on the right-hand side win, and [`LoggerConfig::resolve`]
//! fills the remaining gaps with defaults.

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Channel name used when none is configured
pub const DEFAULT_NAME: &str = "f451-Log";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(rename = "LOGNAME", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "LOGLVL", default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,

    #[serde(rename = "LOGFILE", default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Configuration with every default applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub name: String,
    pub level: LogLevel,
    pub file: Option<PathBuf>,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a config from a mapping. Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use f451_logger::{LogLevel, LoggerConfig};
    /// use serde_json::json;
    ///
    /// let map = json!({ "LOGNAME": "sensors", "LOGLVL": 20 });
    /// let config = LoggerConfig::from_map(map.as_object().unwrap()).unwrap();
    /// assert_eq!(config.name.as_deref(), Some("sensors"));
    /// assert_eq!(config.level, Some(LogLevel::Info));
    /// ```
    pub fn from_map(map: &serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        Self::from_value(serde_json::Value::Object(map.clone()))
    }

    /// Read a config from a JSON object string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    fn from_value(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(LoggerError::config(
                "LoggerConfig",
                "configuration must be a mapping",
            ));
        }
        serde_json::from_value(value).map_err(|e| LoggerError::config("LoggerConfig", e.to_string()))
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Lay `overrides` on top of `self`; every field set in `overrides` wins.
    #[must_use]
    pub fn merge(self, overrides: LoggerConfig) -> LoggerConfig {
        LoggerConfig {
            name: overrides.name.or(self.name),
            level: overrides.level.or(self.level),
            file: overrides.file.or(self.file),
        }
    }

    /// Apply defaults: name `f451-Log`, level `NotSet`, no file. An empty
    /// file path counts as no file.
    #[must_use]
    pub fn resolve(self) -> ResolvedConfig {
        ResolvedConfig {
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            level: self.level.unwrap_or_default(),
            file: self.file.filter(|p| !p.as_os_str().is_empty()),
        }
    }
}
