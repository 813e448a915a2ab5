//! Logger configuration
//!
//! A configuration is usually read from an open string-keyed mapping.
//! Recognized keys are `module`, `format`, `level`, `output` and `log_dir`;
//! every other key is ignored.

use super::error::{LoggerError, Result};
use super::formatter::DEFAULT_TEMPLATE;
use super::log_level::LogLevel;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Module name used when none is configured
pub const DEFAULT_MODULE: &str = "default_module";

/// Where formatted lines go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Stdout,
    /// `<log_dir>/<module>_<YYYY-MM-DD>.log`, opened for appending
    File,
}

impl Output {
    pub fn to_str(&self) -> &'static str {
        match self {
            Output::Stdout => "stdout",
            Output::File => "file",
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Output {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stdout" => Ok(Output::Stdout),
            "file" => Ok(Output::File),
            other => Err(LoggerError::config(
                "output",
                format!("unsupported value '{}', expected 'stdout' or 'file'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub module: String,
    /// `"json"` or a text template
    pub format: String,
    pub min_level: LogLevel,
    pub output: Output,
    /// Directory for file output
    pub log_dir: PathBuf,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            module: DEFAULT_MODULE.to_string(),
            format: DEFAULT_TEMPLATE.to_string(),
            min_level: LogLevel::Warning,
            output: Output::Stdout,
            log_dir: PathBuf::from(crate::appenders::file::DEFAULT_LOG_DIR),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration from an open mapping, ignoring unknown keys
    ///
    /// `level` accepts an ordinal (`0 = panic` .. `6 = trace`) or a level name.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_field_logger::{LogLevel, LoggerConfig, Output};
    ///
    /// let map = serde_json::json!({"module": "billing", "level": 5, "team": "payments"});
    /// let config = LoggerConfig::from_map(map.as_object().unwrap()).unwrap();
    ///
    /// assert_eq!(config.module, "billing");
    /// assert_eq!(config.min_level, LogLevel::Debug);
    /// assert_eq!(config.output, Output::Stdout);
    /// ```
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = map.get("module") {
            config.module = expect_str("module", value)?.to_string();
        }
        if let Some(value) = map.get("format") {
            config.format = expect_str("format", value)?.to_string();
        }
        if let Some(value) = map.get("level") {
            config.min_level = level_from_value(value)?;
        }
        if let Some(value) = map.get("output") {
            config.output = expect_str("output", value)?.parse()?;
        }
        if let Some(value) = map.get("log_dir") {
            config.log_dir = PathBuf::from(expect_str("log_dir", value)?);
        }

        Ok(config)
    }

    /// Parse a JSON object document, see [`LoggerConfig::from_map`]
    pub fn from_json_str(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Self::from_map(&map),
            _ => Err(LoggerError::config("logger", "configuration must be a JSON object")),
        }
    }

    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }
}

impl<'de> Deserialize<'de> for LoggerConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_map(&map).map_err(D::Error::custom)
    }
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| LoggerError::config(key, format!("expected a string, got {}", value)))
}

fn level_from_value(value: &Value) -> Result<LogLevel> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(LogLevel::from_ordinal)
            .ok_or_else(|| LoggerError::config("level", format!("ordinal {} is out of range 0..=6", n))),
        Value::String(s) => s.parse().map_err(|e: String| LoggerError::config("level", e)),
        other => Err(LoggerError::config(
            "level",
            format!("expected an ordinal or a level name, got {}", other),
        )),
    }
}
