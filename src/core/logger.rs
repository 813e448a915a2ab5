//! Main logger implementation

use super::{
    appender::Appender,
    attributes::Attributes,
    config::{LoggerConfig, Output},
    engine::Engine,
    error::{LoggerError, Result},
    exit::{self, ExitHandler},
    formatter::{Formatter, LineFormatter},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    severity::{LogOutcome, Severity},
};
use crate::appenders::file::{ensure_log_dir, FileAppender};
use crate::appenders::ConsoleAppender;
use std::sync::OnceLock;

/// Exit code used when the log directory cannot be created
const SETUP_FAILURE_EXIT_CODE: i32 = 1;

/// A configured logger: one engine plus the attributes shared by all its events
///
/// Common attributes (`module`, `_pid`) are fixed at construction. Every
/// log call merges its own attributes on top of them, per-call values
/// winning on collision.
pub struct Logger {
    engine: Engine,
    common: Attributes,
    exit_handler: Option<ExitHandler>,
}

impl Logger {
    /// Build a logger from a configuration
    ///
    /// Fails only when the file sink cannot be opened. Failure to create the
    /// log directory is treated as unrecoverable and hands code 1 to the exit
    /// function.
    pub fn new(config: &LoggerConfig) -> Result<Self> {
        LoggerBuilder::from_config(config.clone()).build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_field_logger::prelude::*;
    ///
    /// let capture = MemoryAppender::new();
    /// let logger = Logger::builder()
    ///     .module("billing")
    ///     .min_level(LogLevel::Debug)
    ///     .appender(capture.clone())
    ///     .build()
    ///     .unwrap();
    ///
    /// logger.info("charged", "", None, None);
    /// assert!(capture.contents().contains("billing.info message: charged"));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Stdout logger for `config`, ignoring its `output` setting
    pub(crate) fn console(config: &LoggerConfig) -> Self {
        LoggerBuilder::from_config(config.clone()).assemble(Box::new(ConsoleAppender::new()))
    }

    pub fn module(&self) -> &str {
        self.common.module()
    }

    pub fn common_attributes(&self) -> &Attributes {
        &self.common
    }

    pub fn min_level(&self) -> LogLevel {
        self.engine.min_level()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        self.engine.metrics()
    }

    pub fn flush(&self) -> Result<()> {
        self.engine.flush()
    }

    /// Field set of one event: host, full message, then common and
    /// per-call attributes
    pub fn event_fields(
        &self,
        full_message: &str,
        attributes: Option<&Attributes>,
        error: Option<&dyn std::error::Error>,
    ) -> Attributes {
        let full_message = match error {
            Some(err) => err.to_string(),
            None => full_message.to_string(),
        };

        let mut fields = Attributes::new()
            .with_field("host", host_name())
            .with_field("full_message", full_message);
        fields.extend_from(&self.common);
        if let Some(attributes) = attributes {
            fields.extend_from(attributes);
        }
        fields
    }

    /// Write one event at `level`
    ///
    /// When `error` is present its text replaces `full_message`. Format and
    /// write failures are reported on stderr and never reach the caller.
    pub fn log(
        &self,
        level: LogLevel,
        short_message: &str,
        full_message: &str,
        attributes: Option<&Attributes>,
        error: Option<&dyn std::error::Error>,
    ) {
        if !self.engine.enabled(level) {
            self.engine.metrics().record_filtered();
            return;
        }
        let fields = self.event_fields(full_message, attributes, error);
        self.engine.log(level, short_message, fields);
    }

    /// Write one event and report what the caller must do next, without
    /// acting on it
    pub fn dispatch(
        &self,
        severity: Severity,
        short_message: &str,
        full_message: &str,
        attributes: Option<&Attributes>,
        error: Option<&dyn std::error::Error>,
    ) -> LogOutcome {
        self.log(
            severity.level(),
            short_message,
            full_message,
            attributes,
            error,
        );
        severity.outcome()
    }

    /// Act on an outcome: hand an exit code to the exit function
    pub fn settle(&self, outcome: LogOutcome) {
        if let Some(code) = outcome.exit_code() {
            // a terminating handler loses buffered output otherwise
            let _ = self.flush();
            exit::terminate(self.exit_handler.as_ref(), code);
        }
    }

    fn emit(
        &self,
        severity: Severity,
        short_message: &str,
        full_message: &str,
        attributes: Option<&Attributes>,
        error: Option<&dyn std::error::Error>,
    ) {
        let outcome = self.dispatch(severity, short_message, full_message, attributes, error);
        self.settle(outcome);
    }

    #[inline]
    pub fn debug(
        &self,
        short_message: &str,
        full_message: &str,
        attributes: Option<&Attributes>,
        error: Option<&dyn std::error::Error>,
    ) {
        self.emit(Severity::Debug, short_message, full_message, attributes, error);
    }

    #[inline]
    pub fn info(
        &self,
        short_message: &str,
        full_message: &str,
        attributes: Option<&Attributes>,
        error: Option<&dyn std::error::Error>,
    ) {
        self.emit(Severity::Info, short_message, full_message, attributes, error);
    }

    #[inline]
    pub fn warning(
        &self,
        short_message: &str,
        full_message: &str,
        attributes: Option<&Attributes>,
        error: Option<&dyn std::error::Error>,
    ) {
        self.emit(Severity::Warning, short_message, full_message, attributes, error);
    }

    #[inline]
    pub fn error(
        &self,
        short_message: &str,
        full_message: &str,
        attributes: Option<&Attributes>,
        error: Option<&dyn std::error::Error>,
    ) {
        self.emit(Severity::Error, short_message, full_message, attributes, error);
    }

    /// Log at fatal level, then exit with code 1
    pub fn fatal(
        &self,
        short_message: &str,
        full_message: &str,
        attributes: Option<&Attributes>,
        error: Option<&dyn std::error::Error>,
    ) {
        self.emit(Severity::Fatal, short_message, full_message, attributes, error);
    }

    /// Log at fatal level, then exit with code 2
    pub fn alert(
        &self,
        short_message: &str,
        full_message: &str,
        attributes: Option<&Attributes>,
        error: Option<&dyn std::error::Error>,
    ) {
        self.emit(Severity::Alert, short_message, full_message, attributes, error);
    }

    /// Log at fatal level, then exit with code 3
    pub fn emergency(
        &self,
        short_message: &str,
        full_message: &str,
        attributes: Option<&Attributes>,
        error: Option<&dyn std::error::Error>,
    ) {
        self.emit(Severity::Emergency, short_message, full_message, attributes, error);
    }
}

/// Host name, resolved once per process; empty when unknown
fn host_name() -> &'static str {
    static HOST_NAME: OnceLock<String> = OnceLock::new();
    HOST_NAME.get_or_init(|| {
        gethostname::gethostname().to_string_lossy().into_owned()
    })
}

/// Builder for constructing Logger with a fluent API
///
/// Without an explicit appender the sink follows the configured `output`.
pub struct LoggerBuilder {
    config: LoggerConfig,
    appender: Option<Box<dyn Appender>>,
    formatter: Option<Box<dyn Formatter>>,
    exit_handler: Option<ExitHandler>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            appender: None,
            formatter: None,
            exit_handler: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.config.module = module.into();
        self
    }

    /// `"json"` or a text template
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.config.format = format.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: Output) -> Self {
        self.config.output = output;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.config.log_dir = dir.into();
        self
    }

    /// Write to `appender` instead of the configured output
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Use `formatter` instead of the one described by `format`
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Exit function for this logger only, taking precedence over the
    /// process-wide one
    #[must_use = "builder methods return a new value"]
    pub fn exit_handler(mut self, handler: ExitHandler) -> Self {
        self.exit_handler = Some(handler);
        self
    }

    /// Build the Logger
    pub fn build(mut self) -> Result<Logger> {
        let appender = match self.appender.take() {
            Some(appender) => appender,
            None => self.open_output()?,
        };
        Ok(self.assemble(appender))
    }

    fn open_output(&self) -> Result<Box<dyn Appender>> {
        match self.config.output {
            Output::Stdout => Ok(Box::new(ConsoleAppender::new())),
            Output::File => {
                let dir = &self.config.log_dir;
                if let Err(e) = ensure_log_dir(dir) {
                    eprintln!(
                        "[LOGGER CRITICAL] Cannot create log directory '{}': {}",
                        dir.display(),
                        e
                    );
                    exit::terminate(self.exit_handler.as_ref(), SETUP_FAILURE_EXIT_CODE);
                    return Err(LoggerError::io_operation(
                        "creating log directory",
                        dir.display().to_string(),
                        e,
                    ));
                }
                Ok(Box::new(FileAppender::daily(dir, &self.config.module)?))
            }
        }
    }

    fn assemble(self, appender: Box<dyn Appender>) -> Logger {
        let formatter: Box<dyn Formatter> = match self.formatter {
            Some(formatter) => formatter,
            None => Box::new(LineFormatter::from_config(&self.config.format)),
        };

        let common = Attributes::new()
            .with_field("module", self.config.module)
            .with_field("_pid", std::process::id());

        Logger {
            engine: Engine::new(appender, formatter, self.config.min_level),
            common,
            exit_handler: self.exit_handler,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
