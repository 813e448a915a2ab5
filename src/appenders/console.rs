//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::Write;

/// Writes every line to the process's standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &[u8]) -> Result<()> {
        // one locked write per line keeps concurrent lines from interleaving
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
