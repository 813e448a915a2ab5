//! Appender trait for log output destinations

use super::error::Result;

/// A byte sink receiving fully formatted lines
pub trait Appender: Send + Sync {
    fn append(&mut self, line: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
