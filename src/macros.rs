//! Logging macros with `format!` arguments.
//!
//! Each macro formats its arguments and forwards them to the matching
//! [`LogFacade`](crate::LogFacade) method, returning its `Result`.
//!
//! # Examples
//!
//! ```
//! use f451_logger::{log_info, LogFacade};
//!
//! let logger = LogFacade::builder().name("macros-doc").build().unwrap();
//!
//! let port = 8080;
//! log_info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use f451_logger::{LogFacade, LogLevel};
/// # let logger = LogFacade::builder().name("log-doc").build().unwrap();
/// use f451_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use f451_logger::LogFacade;
/// # let logger = LogFacade::builder().name("error-doc").build().unwrap();
/// use f451_logger::log_error;
/// let path = "/etc/sensors.toml";
/// log_error!(logger, "Failed to read {}", path).unwrap();
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
