//! Process-wide default logger
//!
//! The default logger is a shared handle (`Arc<Logger>`) that free functions
//! such as [`info`] or [`fatal`] log through. [`new_default_logger`] replaces
//! it entirely: engine, sink and common attributes.
//!
//! Replacing the default while other threads are logging is memory safe, but
//! calls already in flight finish on the previous instance. Configure the
//! default once at startup, before concurrent use begins.
//!
//! # Example
//!
//! ```no_run
//! use rust_field_logger::{global, Attributes, LoggerConfig};
//!
//! global::new_default_logger(&LoggerConfig::new().with_module("billing")).unwrap();
//!
//! let attrs = Attributes::new().with_field("invoice", 1042);
//! global::warning("invoice overdue", "payment not received", Some(&attrs), None);
//! ```

use crate::core::{Attributes, LogLevel, Logger, LoggerConfig, Result};
use parking_lot::RwLock;
use std::sync::Arc;

static DEFAULT_LOGGER: RwLock<Option<Arc<Logger>>> = parking_lot::const_rwlock(None);

/// Build a logger from `config` and install it as the default
///
/// On error the previous default stays in place.
pub fn new_default_logger(config: &LoggerConfig) -> Result<Arc<Logger>> {
    let logger = Logger::new(config)?;
    Ok(set_default_logger(logger))
}

/// Install an already built logger as the default
pub fn set_default_logger(logger: Logger) -> Arc<Logger> {
    let logger = Arc::new(logger);
    *DEFAULT_LOGGER.write() = Some(Arc::clone(&logger));
    logger
}

/// Handle to the default logger
///
/// Installs a stdout logger with the default configuration on first use.
pub fn default_logger() -> Arc<Logger> {
    if let Some(logger) = DEFAULT_LOGGER.read().as_ref() {
        return Arc::clone(logger);
    }

    let mut slot = DEFAULT_LOGGER.write();
    let logger =
        slot.get_or_insert_with(|| Arc::new(Logger::console(&LoggerConfig::default())));
    Arc::clone(logger)
}

/// Write one event at `level` through the default logger
pub fn log(
    level: LogLevel,
    short_message: &str,
    full_message: &str,
    attributes: Option<&Attributes>,
    error: Option<&dyn std::error::Error>,
) {
    default_logger().log(level, short_message, full_message, attributes, error);
}

pub fn debug(
    short_message: &str,
    full_message: &str,
    attributes: Option<&Attributes>,
    error: Option<&dyn std::error::Error>,
) {
    default_logger().debug(short_message, full_message, attributes, error);
}

pub fn info(
    short_message: &str,
    full_message: &str,
    attributes: Option<&Attributes>,
    error: Option<&dyn std::error::Error>,
) {
    default_logger().info(short_message, full_message, attributes, error);
}

pub fn warning(
    short_message: &str,
    full_message: &str,
    attributes: Option<&Attributes>,
    error: Option<&dyn std::error::Error>,
) {
    default_logger().warning(short_message, full_message, attributes, error);
}

pub fn error(
    short_message: &str,
    full_message: &str,
    attributes: Option<&Attributes>,
    error: Option<&dyn std::error::Error>,
) {
    default_logger().error(short_message, full_message, attributes, error);
}

/// Log at fatal level through the default logger, then exit with code 1
pub fn fatal(
    short_message: &str,
    full_message: &str,
    attributes: Option<&Attributes>,
    error: Option<&dyn std::error::Error>,
) {
    default_logger().fatal(short_message, full_message, attributes, error);
}

/// Log at fatal level through the default logger, then exit with code 2
pub fn alert(
    short_message: &str,
    full_message: &str,
    attributes: Option<&Attributes>,
    error: Option<&dyn std::error::Error>,
) {
    default_logger().alert(short_message, full_message, attributes, error);
}

/// Log at fatal level through the default logger, then exit with code 3
pub fn emergency(
    short_message: &str,
    full_message: &str,
    attributes: Option<&Attributes>,
    error: Option<&dyn std::error::Error>,
) {
    default_logger().emergency(short_message, full_message, attributes, error);
}
