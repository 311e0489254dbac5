//! Error types

use thiserror::Error;

/// Errors that can occur while writing log lines
///
/// Emission methods never surface these; they are returned only by the
/// explicitly fallible entry points (`Output::write_line`, `ScopedLogger::try_output`).
#[derive(Error, Debug)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger disposed: {scope}")]
    Disposed { scope: String },
}

impl LogError {
    /// Create a disposed-logger error
    pub fn disposed(scope: impl Into<String>) -> Self {
        Self::Disposed {
            scope: scope.into(),
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
