//! The logging facade
//!
//! A [`LogFacade`] binds to a named channel, attaches a console sink and an
//! optional file sink, and exposes leveled logging calls plus a pretty-print
//! helper for dumping values to stdout.

use crate::appenders::{ConsoleAppender, FileAppender};
use crate::core::{
    ChannelRegistry, LogLevel, LoggerConfig, LoggerError, Result, SharedChannel, SinkKind,
};
use crate::pretty::PrettyPrinter;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct LogFacade {
    name: String,
    channel: SharedChannel,
    printer: PrettyPrinter,
}

impl LogFacade {
    /// Facade with the default configuration: channel `f451-Log`, level
    /// `NotSet`, console sink only.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    #[must_use]
    pub fn builder() -> LogFacadeBuilder {
        LogFacadeBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current channel threshold
    pub fn level(&self) -> LogLevel {
        self.channel.lock().level()
    }

    /// Path of the attached file sink, if any
    pub fn file_path(&self) -> Option<PathBuf> {
        self.channel.lock().file_path().map(Path::to_path_buf)
    }

    pub fn sink_count(&self, kind: SinkKind) -> usize {
        self.channel.lock().sink_count(kind)
    }

    /// Thresholds of the attached sinks, in attachment order
    pub fn sink_levels(&self) -> Vec<(SinkKind, LogLevel)> {
        self.channel
            .lock()
            .sinks()
            .iter()
            .map(|s| (s.kind(), s.threshold()))
            .collect()
    }

    /// Log `message` at `level`. The default-level (DEBUG) form is [`LogFacade::log_debug`].
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) -> Result<()> {
        self.channel.lock().log(level, message.as_ref())
    }

    #[inline]
    pub fn log_debug(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    #[inline]
    pub fn log_info(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    #[inline]
    pub fn log_warning(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Warning, message)
    }

    #[inline]
    pub fn log_error(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    #[inline]
    pub fn log_critical(&self, message: impl AsRef<str>) -> Result<()> {
        self.log(LogLevel::Critical, message)
    }

    /// Pretty-print `value` to stdout.
    ///
    /// Not filtered by any level and never written to the log sinks.
    ///
    /// # Example
    ///
    /// ```
    /// use f451_logger::{LogFacade, LogLevel};
    /// use serde_json::json;
    ///
    /// let facade = LogFacade::builder()
    ///     .name("doc-debug-stdout")
    ///     .level(LogLevel::Critical)
    ///     .build()
    ///     .unwrap();
    /// facade.debug("Hello world").unwrap();
    /// facade.debug(&json!({"sensor": "bme280", "readings": [21.5, 21.7]})).unwrap();
    /// ```
    pub fn debug<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        self.debug_with(value, true)
    }

    /// Pretty-print `value` to stdout. With `strict` off, a mapping is first
    /// rendered as 4-space indented JSON text and that text is printed.
    pub fn debug_with<T: Serialize + ?Sized>(&self, value: &T, strict: bool) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.debug_to(&mut out, value, strict)
    }

    /// Same as [`LogFacade::debug_with`] but writes to `writer`.
    ///
    /// # Example
    ///
    /// ```
    /// use f451_logger::LogFacade;
    ///
    /// let facade = LogFacade::builder().name("doc-debug").build().unwrap();
    /// let mut out = Vec::new();
    /// facade.debug_to(&mut out, "Hello world", true).unwrap();
    /// assert_eq!(out, b"'Hello world'\n");
    /// ```
    pub fn debug_to<W, T>(&self, writer: &mut W, value: &T, strict: bool) -> Result<()>
    where
        W: Write + ?Sized,
        T: Serialize + ?Sized,
    {
        let mut value = serde_json::to_value(value)?;
        if !strict && value.is_object() {
            value = serde_json::Value::String(to_indented_json(&value)?);
        }
        self.printer.print(writer, &value)?;
        Ok(())
    }

    /// Set the channel threshold and every sink threshold in one step.
    pub fn set_level(&self, level: LogLevel) {
        self.channel.lock().set_level(level);
    }

    /// Replace the file sink with one writing to `path` at `level`.
    ///
    /// The new file is opened first; if that fails the current file sink
    /// stays attached. The console sink and the channel threshold are not
    /// changed.
    pub fn set_file(&self, level: LogLevel, path: impl Into<PathBuf>) -> Result<()> {
        let appender = FileAppender::new(path)?;
        self.channel.lock().attach(Box::new(appender), level);
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.channel.lock().flush()
    }
}

impl fmt::Debug for LogFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogFacade")
            .field("name", &self.name)
            .field("channel", &*self.channel.lock())
            .finish()
    }
}

fn to_indented_json(value: &serde_json::Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| LoggerError::formatter("JSON", e.to_string()))
}

/// Builder for [`LogFacade`]
///
/// `config` supplies the base configuration; `name`, `level` and `file`
/// override the matching fields of it regardless of call order.
///
/// # Example
///
/// ```
/// use f451_logger::{LogFacade, LogLevel, LoggerConfig};
///
/// let base = LoggerConfig::from_json_str(r#"{"LOGNAME": "A", "LOGLVL": 10}"#).unwrap();
/// let facade = LogFacade::builder()
///     .level(LogLevel::Warning)
///     .config(base)
///     .build()
///     .unwrap();
///
/// assert_eq!(facade.name(), "A");
/// assert_eq!(facade.level(), LogLevel::Warning);
/// ```
#[derive(Default)]
pub struct LogFacadeBuilder {
    base: LoggerConfig,
    overrides: LoggerConfig,
    registry: Option<Arc<ChannelRegistry>>,
    console: Option<ConsoleAppender>,
    printer: PrettyPrinter,
}

impl LogFacadeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Base configuration, e.g. read from a settings mapping
    #[must_use]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.base = config;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.overrides.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.overrides.level = Some(level);
        self
    }

    #[must_use]
    pub fn file(mut self, file: impl Into<PathBuf>) -> Self {
        self.overrides.file = Some(file.into());
        self
    }

    /// Registry to look the channel up in instead of the global one
    #[must_use]
    pub fn registry(mut self, registry: Arc<ChannelRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Console appender to attach instead of the default stderr one
    #[must_use]
    pub fn console(mut self, console: ConsoleAppender) -> Self {
        self.console = Some(console);
        self
    }

    #[must_use]
    pub fn printer(mut self, printer: PrettyPrinter) -> Self {
        self.printer = printer;
        self
    }

    pub fn build(self) -> Result<LogFacade> {
        let resolved = self.base.merge(self.overrides).resolve();

        // Open the file before touching the channel so a bad path leaves it as it was.
        let file = resolved.file.map(FileAppender::new).transpose()?;

        let registry = self.registry.unwrap_or_else(ChannelRegistry::global);
        let channel = registry.channel(&resolved.name);
        {
            let mut guard = channel.lock();
            guard.set_threshold(resolved.level);
            guard.attach(Box::new(self.console.unwrap_or_default()), resolved.level);
            if let Some(file) = file {
                guard.attach(Box::new(file), resolved.level);
            }
        }

        Ok(LogFacade {
            name: resolved.name,
            channel,
            printer: self.printer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn isolated() -> LogFacadeBuilder {
        LogFacade::builder()
            .registry(Arc::new(ChannelRegistry::new()))
            .console(ConsoleAppender::with_writer(std::io::sink()))
    }

    #[test]
    fn test_default_construction() {
        let facade = isolated().build().unwrap();
        assert_eq!(facade.name(), "f451-Log");
        assert_eq!(facade.level(), LogLevel::NotSet);
        assert_eq!(facade.sink_count(SinkKind::Console), 1);
        assert_eq!(facade.sink_count(SinkKind::File), 0);
        assert!(facade.file_path().is_none());
    }

    #[test]
    fn test_option_beats_mapping() {
        let map = json!({ "LOGNAME": "A", "LOGLVL": 10 });
        let config = LoggerConfig::from_map(map.as_object().unwrap()).unwrap();
        let facade = isolated()
            .config(config)
            .level(LogLevel::Warning)
            .build()
            .unwrap();

        assert_eq!(facade.name(), "A");
        assert_eq!(facade.level(), LogLevel::Warning);
        assert_eq!(facade.sink_levels(), vec![(SinkKind::Console, LogLevel::Warning)]);
    }

    #[test]
    fn test_bad_file_fails_construction() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let bad = temp_dir.path().join("no-such-dir").join("app.log");
        let registry = Arc::new(ChannelRegistry::new());

        let err = LogFacade::builder()
            .registry(Arc::clone(&registry))
            .name("bad-file")
            .file(&bad)
            .build()
            .unwrap_err();

        assert!(err.is_configuration());
        assert!(!registry.contains("bad-file"));
    }

    #[test]
    fn test_set_level_updates_channel_and_sinks() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let facade = isolated()
            .level(LogLevel::Debug)
            .file(temp_dir.path().join("app.log"))
            .build()
            .unwrap();

        facade.set_level(LogLevel::Error);

        assert_eq!(facade.level(), LogLevel::Error);
        assert!(facade
            .sink_levels()
            .iter()
            .all(|(_, level)| *level == LogLevel::Error));
    }

    #[test]
    fn test_set_file_keeps_console_and_threshold() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("late.log");
        let facade = isolated().level(LogLevel::Info).build().unwrap();

        facade.set_file(LogLevel::Error, &log_file).unwrap();
        assert_eq!(facade.level(), LogLevel::Info);
        assert_eq!(
            facade.sink_levels(),
            vec![
                (SinkKind::Console, LogLevel::Info),
                (SinkKind::File, LogLevel::Error)
            ]
        );

        facade.log_warning("below file threshold").unwrap();
        facade.log_error("at file threshold").unwrap();
        let content = fs::read_to_string(&log_file).unwrap();
        assert!(!content.contains("below file threshold"));
        assert!(content.contains("ERROR: at file threshold"));
    }

    #[test]
    fn test_failed_set_file_keeps_previous_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let good = temp_dir.path().join("good.log");
        let facade = isolated().file(&good).build().unwrap();

        let bad = temp_dir.path().join("missing").join("bad.log");
        assert!(facade.set_file(LogLevel::Debug, &bad).is_err());
        assert_eq!(facade.file_path(), Some(good));
    }

    #[test]
    fn test_debug_strict_and_lenient() {
        let facade = isolated().build().unwrap();
        let value = json!({ "a": 1 });

        let mut out = Vec::new();
        facade.debug_to(&mut out, &value, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{'a': 1}\n");

        let mut out = Vec::new();
        facade.debug_to(&mut out, &value, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "'{\\n    \"a\": 1\\n}'\n"
        );

        // Lenient mode only changes mappings
        let mut out = Vec::new();
        facade.debug_to(&mut out, &[1, 2, 3], false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[1, 2, 3]\n");
    }
}
