//! # Rust Field Logger
//!
//! A thin structured-logging layer: leveled calls carrying a short message,
//! a full message, per-call attributes and an optional error, written as one
//! line per event.
//!
//! ## Features
//!
//! - **Two output modes**: a text template (`[dt] module.level message: ...`)
//!   or one JSON object per line
//! - **Merged metadata**: every event carries the logger's common attributes
//!   (`module`, `_pid`) overlaid with the call's own
//! - **Fatal-class calls**: `fatal`, `alert` and `emergency` exit with codes
//!   1, 2 and 3 through a replaceable exit function
//! - **Default logger**: a process-wide instance behind free functions in
//!   [`global`]

pub mod appenders;
pub mod core;
pub mod global;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        Appender, Attributes, ExitHandler, FieldValue, Formatter, LineFormatter, LogEntry,
        LogLevel, LogOutcome, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        Output, Result, Severity,
    };
    pub use crate::global;
}

pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
pub use crate::core::{
    exit_with, reset_exit_handler, set_exit_handler, Appender, Attributes, Engine, ExitHandler,
    FieldValue, Formatter, LineFormatter, LogEntry, LogLevel, LogOutcome, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Output, Result, Severity, Template,
    DATETIME_FORMAT, DEFAULT_MODULE, DEFAULT_TEMPLATE, JSON_FORMAT,
};
