//! Log entry structure

use super::attributes::Attributes;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// Layout of the `dt` value rendered by both formatter modes
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One event as handed to a formatter
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
    pub fields: Attributes,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>, fields: Attributes) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
            fields,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Capture time as `YYYY-MM-DD HH:MM:SS`, local timezone
    pub fn datetime(&self) -> String {
        self.timestamp.format(DATETIME_FORMAT).to_string()
    }

    /// The `module` attribute, empty when absent
    pub fn module(&self) -> &str {
        self.fields.module()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_datetime_has_second_precision() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let entry = LogEntry::new(LogLevel::Info, "boot", Attributes::new()).with_timestamp(at);
        assert_eq!(entry.datetime(), "2024-03-09 07:05:01");
    }

    #[test]
    fn test_module_from_fields() {
        let entry = LogEntry::new(
            LogLevel::Error,
            "boom",
            Attributes::new().with_field("module", "payments"),
        );
        assert_eq!(entry.module(), "payments");
    }
}
