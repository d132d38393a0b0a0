//! # f451 Logger
//!
//! A small logging facade. A [`LogFacade`] owns a named channel with a
//! console sink and an optional file sink, writes every record as
//! `<timestamp> - <LEVELNAME>: <message>`, and offers a pretty-print helper
//! for dumping values to stdout.
//!
//! ```
//! use f451_logger::{LogFacade, LogLevel};
//!
//! let logger = LogFacade::builder()
//!     .name("lib-doc")
//!     .level(LogLevel::Info)
//!     .build()
//!     .unwrap();
//!
//! logger.log_info("Hello world!").unwrap();
//! logger.log_debug("filtered out").unwrap();
//! logger.debug("Hello world!").unwrap();
//! ```

pub mod appenders;
pub mod core;
pub mod facade;
pub mod macros;
pub mod pretty;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        Appender, ChannelRegistry, LogLevel, LoggerConfig, LoggerError, Result, SinkKind,
    };
    pub use crate::facade::{LogFacade, LogFacadeBuilder};
    pub use crate::pretty::PrettyPrinter;
}

pub use appenders::{ConsoleAppender, ConsoleTarget, FileAppender};
pub use core::{
    Appender, Channel, ChannelRegistry, LogEntry, LogLevel, LoggerConfig, LoggerError,
    ResolvedConfig, Result, SharedChannel, SinkKind, DEFAULT_NAME,
};
pub use facade::{LogFacade, LogFacadeBuilder};
pub use pretty::PrettyPrinter;
