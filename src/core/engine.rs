//! Leveled logging engine
//!
//! Owns the sink, the formatter and the minimum level of one logger.
//! `Engine::log` is safe to call from many threads: the sink sits behind a
//! mutex so each line reaches it in one piece.

use super::{
    appender::Appender,
    attributes::Attributes,
    error::{LoggerError, Result},
    formatter::Formatter,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use parking_lot::Mutex;

pub struct Engine {
    appender: Mutex<Box<dyn Appender>>,
    formatter: Box<dyn Formatter>,
    min_level: LogLevel,
    metrics: LoggerMetrics,
}

impl Engine {
    pub fn new(
        appender: Box<dyn Appender>,
        formatter: Box<dyn Formatter>,
        min_level: LogLevel,
    ) -> Self {
        Self {
            appender: Mutex::new(appender),
            formatter,
            min_level,
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.passes(self.min_level)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Emit one event; failures are reported on stderr, never returned
    pub fn log(&self, level: LogLevel, message: &str, fields: Attributes) {
        if !self.enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let entry = LogEntry::new(level, message, fields);
        match self.write_entry(&entry) {
            Ok(()) => self.metrics.record_logged(),
            Err(e) => {
                self.metrics.record_dropped();
                eprintln!("[LOGGER ERROR] Failed to write {} entry: {}", level, e);
            }
        }
    }

    /// Format and write one entry, bypassing the level filter
    pub fn write_entry(&self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry)?;

        let mut appender = self.appender.lock();
        appender
            .append(&line)
            .and_then(|()| appender.flush())
            .map_err(|e| LoggerError::writer(format!("{}: {}", appender.name(), e)))
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::core::formatter::LineFormatter;

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&mut self, _line: &[u8]) -> Result<()> {
            Err(LoggerError::writer("disk full"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn engine(capture: &MemoryAppender, min_level: LogLevel) -> Engine {
        Engine::new(
            Box::new(capture.clone()),
            Box::new(LineFormatter::default()),
            min_level,
        )
    }

    #[test]
    fn test_min_level_filter() {
        let capture = MemoryAppender::new();
        let engine = engine(&capture, LogLevel::Warning);

        engine.log(LogLevel::Info, "dropped", Attributes::new());
        assert!(capture.is_empty());

        engine.log(LogLevel::Warning, "kept", Attributes::new());
        engine.log(LogLevel::Fatal, "kept too", Attributes::new());
        assert_eq!(capture.lines().len(), 2);

        assert_eq!(engine.metrics().filtered_count(), 1);
        assert_eq!(engine.metrics().total_logged(), 2);
    }

    #[test]
    fn test_format_failure_is_swallowed() {
        let capture = MemoryAppender::new();
        let engine = engine(&capture, LogLevel::Trace);

        let fields = Attributes::new().with_field("bad", f64::NAN);
        engine.log(LogLevel::Error, "unserializable", fields);

        assert!(capture.is_empty());
        assert_eq!(engine.metrics().dropped_count(), 1);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let engine = Engine::new(
            Box::new(FailingAppender),
            Box::new(LineFormatter::default()),
            LogLevel::Trace,
        );

        engine.log(LogLevel::Error, "lost", Attributes::new());
        assert_eq!(engine.metrics().dropped_count(), 1);
        assert_eq!(engine.metrics().total_logged(), 0);
    }
}
