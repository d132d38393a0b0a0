//! Core logger types and traits

pub mod appender;
pub mod channel;
pub mod config;
pub mod error;
pub mod format;
pub mod log_entry;
pub mod log_level;
pub mod registry;

pub use appender::{Appender, SinkKind};
pub use channel::{Channel, Sink};
pub use config::{LoggerConfig, ResolvedConfig, DEFAULT_NAME};
pub use error::{LoggerError, Result};
pub use format::{format_record, TIMESTAMP_FORMAT};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use registry::{ChannelRegistry, SharedChannel};
