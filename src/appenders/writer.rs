//! Appender over any `std::io::Write` implementation

use crate::core::{Appender, Result};
use std::io::Write;

/// Adapts an arbitrary writer (stderr, a socket, a pipe) into an appender
pub struct WriterAppender<W> {
    writer: W,
    name: String,
}

impl<W: Write + Send + Sync> WriterAppender<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name: "writer".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> Appender for WriterAppender<W> {
    fn append(&mut self, line: &[u8]) -> Result<()> {
        self.writer.write_all(line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_through() {
        let mut appender = WriterAppender::new(Vec::new()).with_name("vec");
        appender.append(b"one\n").unwrap();
        appender.append(b"two\n").unwrap();
        appender.flush().unwrap();

        assert_eq!(appender.name(), "vec");
        assert_eq!(appender.into_inner(), b"one\ntwo\n");
    }
}
