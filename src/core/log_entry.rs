//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub channel: String,
}

impl LogEntry {
    /// The message is kept exactly as given.
    pub fn new(level: LogLevel, message: &str, channel: &str) -> Self {
        Self {
            level,
            message: message.to_string(),
            timestamp: Local::now(),
            channel: channel.to_string(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
