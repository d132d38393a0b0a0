//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};
use std::path::Path;

/// Kind of destination an appender writes to. A channel holds at most one
/// appender of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Console,
    File,
}

pub trait Appender: Send {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
    fn kind(&self) -> SinkKind;

    /// Destination path for file-backed appenders
    fn path(&self) -> Option<&Path> {
        None
    }
}
