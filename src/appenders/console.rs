//! Console appender implementation

use crate::core::{format_record, Appender, LogEntry, LoggerError, Result, SinkKind};
use std::fmt;
use std::io::{self, Write};

/// Stream the console appender writes to
#[derive(Default)]
pub enum ConsoleTarget {
    #[default]
    Stderr,
    Stdout,
    /// Any writer, e.g. an in-memory buffer for capturing output
    Writer(Box<dyn Write + Send>),
}

impl fmt::Debug for ConsoleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleTarget::Stderr => f.write_str("Stderr"),
            ConsoleTarget::Stdout => f.write_str("Stdout"),
            ConsoleTarget::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ConsoleAppender {
    target: ConsoleTarget,
}

impl ConsoleAppender {
    /// Console appender writing to stderr
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stdout() -> Self {
        Self {
            target: ConsoleTarget::Stdout,
        }
    }

    /// Console appender writing to an arbitrary stream
    ///
    /// # Example
    ///
    /// ```
    /// use f451_logger::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::with_writer(std::io::sink());
    /// ```
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            target: ConsoleTarget::Writer(Box::new(writer)),
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match &mut self.target {
            ConsoleTarget::Stderr => writeln!(io::stderr().lock(), "{}", line),
            ConsoleTarget::Stdout => writeln!(io::stdout().lock(), "{}", line),
            ConsoleTarget::Writer(writer) => writeln!(writer, "{}", line),
        }
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = format_record(entry);
        self.write_line(&line)
            .map_err(|e| LoggerError::sink_write(self.name(), e))
    }

    fn flush(&mut self) -> Result<()> {
        let result = match &mut self.target {
            ConsoleTarget::Stderr => io::stderr().flush(),
            ConsoleTarget::Stdout => io::stdout().flush(),
            ConsoleTarget::Writer(writer) => writer.flush(),
        };
        result.map_err(|e| LoggerError::sink_write(self.name(), e))
    }

    fn name(&self) -> &str {
        "console"
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }
}
