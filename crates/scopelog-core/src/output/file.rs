//! File output
//!
//! Appends lines to a file, flushing after each one so that the file is
//! readable while the process is still running.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::Output;
use crate::error::LogResult;

/// Append-mode file output
#[derive(Debug)]
pub struct FileOutput {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileOutput {
    /// Open (creating if needed) `path` for appending
    pub fn open(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the file and reopen it for appending
    pub fn truncate(&self) -> LogResult<()> {
        drop(File::create(&self.path)?);
        let reopened = OpenOptions::new().create(true).append(true).open(&self.path)?;
        *self.file.lock() = reopened;
        Ok(())
    }
}

impl Output for FileOutput {
    fn write_line(&self, line: &str) -> LogResult<()> {
        let mut file = self.file.lock();
        writeln!(file, "{}", line)?;
        file.flush()?;
        Ok(())
    }

    fn flush(&self) -> LogResult<()> {
        self.file.lock().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_output_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoped.log");

        let output = FileOutput::open(&path).unwrap();
        output.write_line("one").unwrap();
        output.write_line("two").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");

        // Reopening appends rather than truncating
        let again = FileOutput::open(&path).unwrap();
        again.write_line("three").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_file_output_truncate() {
        let dir = tempfile::tempdir().unwrap();
        let output = FileOutput::open(dir.path().join("t.log")).unwrap();
        output.write_line("old").unwrap();
        output.truncate().unwrap();
        output.write_line("new").unwrap();
        assert_eq!(std::fs::read_to_string(output.path()).unwrap(), "new\n");
    }

    #[test]
    fn test_file_output_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileOutput::open(dir.path().join("missing").join("x.log"));
        assert!(result.is_err());
    }
}
