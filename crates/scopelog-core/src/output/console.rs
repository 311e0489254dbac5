//! Console outputs

use std::io::Write;

use super::traits::Output;
use crate::error::LogResult;

/// Writes lines to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrOutput;

impl StderrOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for StderrOutput {
    fn write_line(&self, line: &str) -> LogResult<()> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> LogResult<()> {
        std::io::stderr().flush()?;
        Ok(())
    }
}

/// Writes lines to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl StdoutOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for StdoutOutput {
    fn write_line(&self, line: &str) -> LogResult<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> LogResult<()> {
        std::io::stdout().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_outputs_write() {
        // Only verifies the writes succeed
        StderrOutput::new().write_line("stderr line").unwrap();
        StdoutOutput::new().write_line("stdout line").unwrap();
        StdoutOutput::new().flush().unwrap();
    }
}
