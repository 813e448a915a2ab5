//! Core logger types and traits

pub mod appender;
pub mod attributes;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod severity;

pub use appender::Appender;
pub use attributes::{Attributes, FieldValue};
pub use config::{LoggerConfig, Output, DEFAULT_MODULE};
pub use engine::Engine;
pub use error::{LoggerError, Result};
pub use exit::{exit_with, reset_exit_handler, set_exit_handler, ExitHandler};
pub use formatter::{Formatter, LineFormatter, Template, DEFAULT_TEMPLATE, JSON_FORMAT};
pub use log_entry::{LogEntry, DATETIME_FORMAT};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use severity::{LogOutcome, Severity};
