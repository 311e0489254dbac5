//! Logger trait definition

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use crate::level::Level;

/// Leveled logging abstraction
///
/// Implementations:
/// - `ScopedLogger`: registry-backed scoped logger
/// - `NoOpLogger`: silent logger for testing
///
/// There is a single emission path; the level-named methods of
/// `LoggerExt` only forward to it.
pub trait Logger: Send + Sync {
    /// Whether a message at `level` would currently be written
    fn enabled(&self, level: Level) -> bool;

    /// Emit a message at `level`, attributed to `location`
    fn log_at(&self, level: Level, location: &'static Location<'static>, args: fmt::Arguments<'_>);
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Level-named wrappers, attributed to the caller's location
///
/// Each level comes in a direct form (`error`) taking anything printable
/// and a formatted form (`errorf`) taking `format_args!` output.
pub trait LoggerExt: Logger {
    #[track_caller]
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log_at(level, Location::caller(), args);
    }

    /// Emit at `on_true` or `on_false` depending on `condition`
    #[track_caller]
    fn log_cond(
        &self,
        condition: bool,
        on_true: impl Into<Level>,
        on_false: impl Into<Level>,
        message: impl fmt::Display,
    ) {
        let level = if condition { on_true.into() } else { on_false.into() };
        self.log_at(level, Location::caller(), format_args!("{}", message));
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Error, Location::caller(), args);
    }

    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Warning, Location::caller(), args);
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Info, Location::caller(), args);
    }

    #[track_caller]
    fn verbosef(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Verbose, Location::caller(), args);
    }

    #[track_caller]
    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.log_at(Level::Trace, Location::caller(), args);
    }

    #[track_caller]
    fn error(&self, message: impl fmt::Display) {
        self.log_at(Level::Error, Location::caller(), format_args!("{}", message));
    }

    #[track_caller]
    fn warn(&self, message: impl fmt::Display) {
        self.log_at(Level::Warning, Location::caller(), format_args!("{}", message));
    }

    #[track_caller]
    fn info(&self, message: impl fmt::Display) {
        self.log_at(Level::Info, Location::caller(), format_args!("{}", message));
    }

    #[track_caller]
    fn verbose(&self, message: impl fmt::Display) {
        self.log_at(Level::Verbose, Location::caller(), format_args!("{}", message));
    }

    #[track_caller]
    fn trace(&self, message: impl fmt::Display) {
        self.log_at(Level::Trace, Location::caller(), format_args!("{}", message));
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn enabled(&self, _level: Level) -> bool {
        false
    }

    fn log_at(&self, _level: Level, _location: &'static Location<'static>, _args: fmt::Arguments<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<(Level, u32, String)>>,
    }

    impl Logger for Recording {
        fn enabled(&self, _level: Level) -> bool {
            true
        }

        fn log_at(&self, level: Level, location: &'static Location<'static>, args: fmt::Arguments<'_>) {
            self.calls.lock().push((level, location.line(), args.to_string()));
        }
    }

    #[test]
    fn test_noop_logger() {
        let logger = NoOpLogger::new();
        assert!(!logger.enabled(Level::Error));

        // These should all do nothing without panicking
        logger.error("error message");
        logger.warn("warning message");
        logger.infof(format_args!("info {}", 1));
        logger.trace("trace message");
    }

    #[test]
    fn test_wrappers_forward_level_and_caller() {
        let logger = Recording::default();
        let line = line!() + 1;
        logger.warn("w");
        logger.verbosef(format_args!("v{}", 1));

        let calls = logger.calls.lock();
        assert_eq!(calls[0], (Level::Warning, line, "w".to_string()));
        assert_eq!(calls[1], (Level::Verbose, line + 1, "v1".to_string()));
    }

    #[test]
    fn test_shared_logger_object() {
        let logger: SharedLogger = Arc::new(Recording::default());
        logger.log_cond(false, Level::Error, "trace", "t");
        logger.error(5);
        assert!(logger.enabled(Level::Trace));
    }
}
