//! Convenience macros for logging with format arguments
//!
//! ```
//! use scopelog_core::{elog_info, elog_print, Context};
//!
//! let ctx = Context::new();
//! let log = ctx.create_with_defaults("macros");
//! elog_info!(log, "listening on {}", 8080);
//! elog_print!(log, "{} workers", 4);
//! ```

#[macro_export]
macro_rules! elog_error {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.errorf(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! elog_warn {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.warnf(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! elog_info {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.infof(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! elog_verbose {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.verbosef(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! elog_trace {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LoggerExt as _;
        $logger.tracef(format_args!($($arg)*))
    }};
}

/// Unleveled print on a scoped logger
#[macro_export]
macro_rules! elog_print {
    ($logger:expr, $($arg:tt)*) => {
        $logger.printf(format_args!($($arg)*))
    };
}

/// Write through the global default logger and exit
#[macro_export]
macro_rules! elog_fatal {
    ($($arg:tt)*) => {
        $crate::global().fatalf(format_args!($($arg)*))
    };
}

/// Write through the global default logger and panic
#[macro_export]
macro_rules! elog_panic {
    ($($arg:tt)*) => {
        $crate::global().panicf(format_args!($($arg)*))
    };
}
