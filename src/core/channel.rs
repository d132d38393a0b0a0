//! Named logging channel
//!
//! A channel owns a threshold and an ordered list of sinks. Each sink pairs
//! an [`Appender`] with its own threshold; a record reaches a sink only if it
//! passes both the channel threshold and the sink threshold.

use super::{
    appender::{Appender, SinkKind},
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
};
use std::fmt;
use std::path::Path;

pub struct Sink {
    threshold: LogLevel,
    appender: Box<dyn Appender>,
}

impl Sink {
    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    pub fn kind(&self) -> SinkKind {
        self.appender.kind()
    }

    pub fn path(&self) -> Option<&Path> {
        self.appender.path()
    }
}

pub struct Channel {
    name: String,
    level: LogLevel,
    sinks: Vec<Sink>,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LogLevel::NotSet,
            sinks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Set the channel threshold only; sink thresholds are left alone.
    pub fn set_threshold(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Set the channel threshold and every sink threshold.
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
        for sink in &mut self.sinks {
            sink.threshold = level;
        }
    }

    #[inline]
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        self.level.admits(level)
    }

    /// Attach an appender at `threshold`, replacing any sink of the same kind.
    pub fn attach(&mut self, appender: Box<dyn Appender>, threshold: LogLevel) {
        self.detach(appender.kind());
        self.sinks.push(Sink {
            threshold,
            appender,
        });
    }

    /// Remove every sink of `kind`, flushing each one first. Returns how many
    /// were removed.
    pub fn detach(&mut self, kind: SinkKind) -> usize {
        let before = self.sinks.len();
        let mut kept = Vec::with_capacity(before);
        for mut sink in self.sinks.drain(..) {
            if sink.kind() != kind {
                kept.push(sink);
                continue;
            }
            // Nobody is waiting on this result, so report it here.
            if let Err(e) = sink.appender.flush() {
                eprintln!(
                    "[LOGGER ERROR] Channel '{}': flush of released {} sink failed: {}",
                    self.name,
                    sink.appender.name(),
                    e
                );
            }
        }
        self.sinks = kept;
        before - self.sinks.len()
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    pub fn sink_count(&self, kind: SinkKind) -> usize {
        self.sinks.iter().filter(|s| s.kind() == kind).count()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.sinks
            .iter()
            .find(|s| s.kind() == SinkKind::File)
            .and_then(Sink::path)
    }

    /// Write one record to every sink whose threshold it meets.
    ///
    /// Stops at the first failing sink; sinks before it have already written.
    pub fn log(&mut self, level: LogLevel, message: &str) -> Result<()> {
        if !self.is_enabled_for(level) {
            return Ok(());
        }

        let entry = LogEntry::new(level, message, &self.name);
        for sink in &mut self.sinks {
            if sink.threshold.admits(level) {
                sink.appender.append(&entry)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        for sink in &mut self.sinks {
            sink.appender.flush()?;
        }
        Ok(())
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sinks: Vec<(SinkKind, LogLevel)> =
            self.sinks.iter().map(|s| (s.kind(), s.threshold)).collect();
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("sinks", &sinks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Records every message it receives
    struct Recorder {
        kind: SinkKind,
        seen: Arc<Mutex<Vec<(LogLevel, String)>>>,
        flushed: Arc<Mutex<usize>>,
    }

    impl Recorder {
        fn new(kind: SinkKind) -> (Self, Arc<Mutex<Vec<(LogLevel, String)>>>) {
            let seen = Arc::new(Mutex::new(Vec::new()));
            let recorder = Self {
                kind,
                seen: Arc::clone(&seen),
                flushed: Arc::new(Mutex::new(0)),
            };
            (recorder, seen)
        }
    }

    impl Appender for Recorder {
        fn append(&mut self, entry: &LogEntry) -> Result<()> {
            self.seen.lock().push((entry.level, entry.message.clone()));
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            *self.flushed.lock() += 1;
            Ok(())
        }

        fn name(&self) -> &str {
            "recorder"
        }

        fn kind(&self) -> SinkKind {
            self.kind
        }
    }

    struct Failing;

    impl Appender for Failing {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            Err(LoggerError::sink_write(
                "failing",
                std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            ))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }

        fn kind(&self) -> SinkKind {
            SinkKind::File
        }
    }

    #[test]
    fn test_channel_threshold_filters() {
        let mut channel = Channel::new("test");
        let (recorder, seen) = Recorder::new(SinkKind::Console);
        channel.attach(Box::new(recorder), LogLevel::NotSet);
        channel.set_threshold(LogLevel::Warning);

        channel.log(LogLevel::Info, "dropped").unwrap();
        channel.log(LogLevel::Error, "kept").unwrap();

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], (LogLevel::Error, "kept".to_string()));
    }

    #[test]
    fn test_sink_threshold_filters_independently() {
        let mut channel = Channel::new("test");
        let (console, console_seen) = Recorder::new(SinkKind::Console);
        let (file, file_seen) = Recorder::new(SinkKind::File);
        channel.attach(Box::new(console), LogLevel::Debug);
        channel.attach(Box::new(file), LogLevel::Error);

        channel.log(LogLevel::Info, "info").unwrap();
        channel.log(LogLevel::Error, "error").unwrap();

        assert_eq!(console_seen.lock().len(), 2);
        assert_eq!(file_seen.lock().len(), 1);
    }

    #[test]
    fn test_attach_replaces_same_kind() {
        let mut channel = Channel::new("test");
        let (first, first_seen) = Recorder::new(SinkKind::File);
        let first_flushed = Arc::clone(&first.flushed);
        let (second, second_seen) = Recorder::new(SinkKind::File);

        channel.attach(Box::new(first), LogLevel::NotSet);
        channel.attach(Box::new(second), LogLevel::NotSet);
        assert_eq!(channel.sink_count(SinkKind::File), 1);
        assert_eq!(*first_flushed.lock(), 1);

        channel.log(LogLevel::Info, "after").unwrap();
        assert!(first_seen.lock().is_empty());
        assert_eq!(second_seen.lock().len(), 1);
    }

    #[test]
    fn test_set_level_updates_every_sink() {
        let mut channel = Channel::new("test");
        let (console, _) = Recorder::new(SinkKind::Console);
        let (file, _) = Recorder::new(SinkKind::File);
        channel.attach(Box::new(console), LogLevel::Debug);
        channel.attach(Box::new(file), LogLevel::Info);

        channel.set_level(LogLevel::Error);

        assert_eq!(channel.level(), LogLevel::Error);
        assert!(channel.sinks().iter().all(|s| s.threshold() == LogLevel::Error));
    }

    #[test]
    fn test_write_error_propagates() {
        let mut channel = Channel::new("test");
        channel.attach(Box::new(Failing), LogLevel::NotSet);

        let err = channel.log(LogLevel::Info, "lost").unwrap_err();
        assert!(matches!(err, LoggerError::SinkWrite { .. }));

        // Filtered records never reach the failing sink
        channel.set_level(LogLevel::Critical);
        assert!(channel.log(LogLevel::Info, "filtered").is_ok());
    }
}
