//! Append-only file sink

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends log lines to a file, creating it if needed.
///
/// The logger writes each line in a single `write_all` under its lock, so no
/// extra buffering is added here; lines reach the file as they are logged.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Open `path` for appending
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_cli_logger::{FileSink, Logger};
    ///
    /// let logger = Logger::new(FileSink::open("/var/log/app.log").unwrap());
    /// logger.info("started", &[]);
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_and_appends() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");

        FileSink::open(&path).unwrap().write_all(b"first\n").unwrap();
        FileSink::open(&path).unwrap().write_all(b"second\n").unwrap();

        let content = std::fs::read_to_string(&path).expect("Failed to read log file");
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_open_missing_directory_has_context() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("app.log");

        let err = FileSink::open(&path).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
    }
}
