//! No-op output implementation

use super::traits::Output;
use crate::error::LogResult;

/// An output that discards every line
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpOutput;

impl NoOpOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for NoOpOutput {
    fn write_line(&self, _line: &str) -> LogResult<()> {
        Ok(())
    }
}
