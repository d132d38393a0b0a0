//! File appender implementation

use crate::core::{format_record, Appender, LogEntry, LoggerError, Result, SinkKind};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends formatted records to a file, creating it if needed.
///
/// The file is opened when the appender is created and every record is
/// flushed as soon as it is written. The handle is released on drop.
pub struct FileAppender {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_open(path.display().to_string(), e))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut output = format_record(entry);
        output.push('\n');

        self.writer
            .write_all(output.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| LoggerError::sink_write("file", e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LoggerError::sink_write("file", e))
    }

    fn name(&self) -> &str {
        "file"
    }

    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!(
                "[LOGGER ERROR] Flush of '{}' failed on release: {}",
                self.path.display(),
                e
            );
        }
    }
}
