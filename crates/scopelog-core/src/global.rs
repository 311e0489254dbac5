//! Process-wide convenience context
//!
//! Free functions operating on a lazily created `Context` built from the
//! environment (see `ContextConfig::from_env`). Libraries that need
//! isolation should construct their own `Context` instead.

use std::fmt;

use once_cell::sync::Lazy;

use crate::config::ContextConfig;
use crate::context::Context;
use crate::flags::{ElogFlags, Flags};
use crate::level::Level;
use crate::logger::ScopedLogger;
use crate::output::SharedOutput;
use crate::registry::ScopeSummary;

// Global context instance
static GLOBAL_CONTEXT: Lazy<Context> = Lazy::new(|| Context::with_config(ContextConfig::from_env()));

/// The process-wide context
pub fn global() -> &'static Context {
    &GLOBAL_CONTEXT
}

/// Create a scoped logger in the global context
pub fn new_logger(scope: &str, level: &str, output: Option<SharedOutput>) -> ScopedLogger {
    global().create(scope, level, output)
}

/// Create an info-level logger writing to the default output
pub fn new_logger_with_defaults(scope: &str) -> ScopedLogger {
    global().create_with_defaults(scope)
}

/// The global unscoped logger
pub fn default_logger() -> &'static ScopedLogger {
    global().default_logger()
}

/// Resume global output
pub fn logs_on() {
    global().logs_on();
}

/// Silence every global logger
pub fn logs_off() {
    global().logs_off();
}

/// Global master switch
pub fn set_active(active: bool) {
    global().set_active(active);
}

/// Whether global output is enabled
pub fn is_active() -> bool {
    global().is_active()
}

/// Set the global override level; `Disabled` removes it
pub fn set_global_level(level: impl Into<Level>) {
    global().set_global_level(level);
}

/// Current global override level
pub fn global_level() -> Level {
    global().global_level()
}

/// Flags for global loggers created after this call
pub fn set_default_flags(flags: Flags) {
    global().set_default_flags(flags);
}

/// Flags new global loggers start with
pub fn default_flags() -> Flags {
    global().default_flags()
}

/// Output for global loggers created after this call
pub fn set_default_output(output: SharedOutput) {
    global().set_default_output(output);
}

/// Replace the global behavior switches
pub fn set_elog_flags(flags: ElogFlags) {
    global().set_elog_flags(flags);
}

/// Current global behavior switches
pub fn elog_flags() -> ElogFlags {
    global().elog_flags()
}

/// All live loggers, sorted by scope
pub fn list_scoped_logs() -> Vec<ScopedLogger> {
    global().registry().list_all()
}

/// Parallel vectors of scopes, ids and level names
pub fn list_scopes_and_levels() -> (Vec<String>, Vec<String>, Vec<String>) {
    global().registry().list_scopes_and_levels()
}

/// One summary row per live logger
pub fn list_summary() -> Vec<ScopeSummary> {
    global().registry().list_summary()
}

/// Live logger with this id
pub fn scoped_log_by_id(id: &str) -> Option<ScopedLogger> {
    global().registry().find_by_id(id)
}

/// Lowest-id live logger with this scope
pub fn scoped_log_by_scope(scope: &str) -> Option<ScopedLogger> {
    global().registry().find_first_by_scope(scope)
}

/// Set the level of the logger with this id
pub fn set_scope_level_by_id(id: &str, level: impl Into<Level>) -> bool {
    global().registry().set_level_by_id(id, level.into())
}

/// Set the level of the first logger with this scope
pub fn set_scope_level_by_scope(scope: &str, level: impl Into<Level>) -> bool {
    global().registry().set_level_by_scope(scope, level.into())
}

/// Print through the global default logger
#[track_caller]
pub fn print(message: impl fmt::Display) {
    global().print(message);
}

/// Formatted print through the global default logger
#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    global().printf(args);
}

/// Line print through the global default logger
#[track_caller]
pub fn println(message: impl fmt::Display) {
    global().println(message);
}

/// Write through the global default logger, then exit
#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    global().fatal(message)
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    global().fatalf(args)
}

#[track_caller]
pub fn fatalln(message: impl fmt::Display) -> ! {
    global().fatalln(message)
}

/// Write through the global default logger, then panic
#[track_caller]
pub fn panic(message: impl fmt::Display) -> ! {
    global().panic(message)
}

#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    global().panicf(args)
}

#[track_caller]
pub fn panicln(message: impl fmt::Display) -> ! {
    global().panicln(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemoryOutput;
    use crate::traits::{Logger, LoggerExt};
    use std::sync::Arc;

    // The global context is shared by every test in this binary, so these
    // tests only use scopes of their own and never flip the global switches.

    #[test]
    fn test_global_create_and_list() {
        let buffer = MemoryOutput::new();
        let log = new_logger("global_test_create", "info", Some(Arc::new(buffer.clone())));
        log.set_flags(Flags::empty());

        let (scopes, ids, _) = list_scopes_and_levels();
        assert!(scopes.iter().any(|s| s == "global_test_create"));
        assert!(ids.contains(&log.id().to_string()));

        log.info("a log line");
        assert_eq!(buffer.lines(), vec!["global_test_create (INFO) a log line"]);

        log.dispose();
        assert!(scoped_log_by_id(log.id().as_str()).is_none());
    }

    #[test]
    fn test_global_level_by_id_and_scope() {
        let log = new_logger_with_defaults("global_test_levels");
        assert_eq!(log.level(), Level::Info);

        assert!(set_scope_level_by_id(log.id().as_str(), "trace"));
        assert_eq!(log.level(), Level::Trace);
        assert!(set_scope_level_by_scope("global_test_levels", "err"));
        assert_eq!(log.level(), Level::Error);
        assert_eq!(scoped_log_by_scope("global_test_levels"), Some(log.clone()));

        log.dispose();
        assert!(!set_scope_level_by_scope("global_test_levels", "info"));
    }

    #[test]
    fn test_global_listing_sorted() {
        let names = ["global_test_sort_c", "global_test_sort_a", "global_test_sort_b"];
        let logs: Vec<ScopedLogger> = names.iter().map(|n| new_logger_with_defaults(n)).collect();

        let ours: Vec<String> = list_scoped_logs()
            .iter()
            .map(|l| l.scope())
            .filter(|s| s.starts_with("global_test_sort_"))
            .collect();
        assert_eq!(ours, vec!["global_test_sort_a", "global_test_sort_b", "global_test_sort_c"]);

        for log in logs {
            log.dispose();
        }
    }

    #[test]
    #[should_panic(expected = "global_test_panicln")]
    fn test_panicln_forwards() {
        panicln("global_test_panicln");
    }

    #[test]
    fn test_default_logger_is_trace() {
        assert_eq!(default_logger().level(), Level::Trace);
        if is_active() {
            assert!(default_logger().enabled(Level::Trace));
        }
    }
}
