//! File appender implementation

use crate::core::{Appender, LoggerError, Result};
use chrono::Local;
use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Directory used for file output when none is configured
pub const DEFAULT_LOG_DIR: &str = "./var/log";

pub struct FileAppender {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileAppender {
    /// Open `path` for appending, creating the file if needed
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Open today's file for `module` inside `dir`: `<dir>/<module>_<YYYY-MM-DD>.log`
    ///
    /// The directory must already exist, see [`ensure_log_dir`].
    pub fn daily(dir: impl AsRef<Path>, module: &str) -> Result<Self> {
        Self::new(daily_path(dir, module))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Path of today's log file for `module` inside `dir`
pub fn daily_path(dir: impl AsRef<Path>, module: &str) -> PathBuf {
    dir.as_ref()
        .join(format!("{}_{}.log", module, Local::now().format("%Y-%m-%d")))
}

/// Create `dir` and its parents if missing, world-writable on unix
pub fn ensure_log_dir(dir: impl AsRef<Path>) -> std::io::Result<()> {
    let dir = dir.as_ref();
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(dir)
}

impl Appender for FileAppender {
    fn append(&mut self, line: &[u8]) -> Result<()> {
        self.writer.write_all(line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
