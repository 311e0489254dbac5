//! Output trait definition

use std::sync::Arc;

use crate::error::LogResult;

/// Destination for composed log lines
///
/// `line` never carries a trailing newline; implementations terminate it.
/// Writes are synchronous and happen on the calling thread.
pub trait Output: Send + Sync {
    /// Write one line
    fn write_line(&self, line: &str) -> LogResult<()>;

    /// Flush buffered data, if any
    fn flush(&self) -> LogResult<()> {
        Ok(())
    }
}

/// Type alias for an Arc-wrapped output
pub type SharedOutput = Arc<dyn Output>;
