//! Adapter for arbitrary writers

use std::fmt;
use std::io::Write;

use parking_lot::Mutex;

use super::traits::Output;
use crate::error::LogResult;

/// Output wrapping any `Write` implementation behind a lock
pub struct WriterOutput<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Output for WriterOutput<W> {
    fn write_line(&self, line: &str) -> LogResult<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> LogResult<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl<W: Write + Send> fmt::Debug for WriterOutput<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterOutput").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_output_into_inner() {
        let output = WriterOutput::new(Vec::<u8>::new());
        output.write_line("alpha").unwrap();
        output.write_line("beta").unwrap();
        let bytes = output.into_inner();
        assert_eq!(String::from_utf8(bytes).unwrap(), "alpha\nbeta\n");
    }
}
