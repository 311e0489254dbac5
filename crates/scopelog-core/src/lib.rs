//! Scopelog Core
//!
//! Scoped, leveled logging over a plain line-writing primitive.
//!
//! A program creates named loggers ("scopes"), each with its own level,
//! output and formatting flags, plus an implicit default logger for
//! print-style calls. Every leveled call is filtered by the master switch,
//! the logger's own level and an optional process-wide override, then passes
//! through optional repeated-message suppression before being written.
//!
//! ```rust
//! use scopelog_core::{Context, LoggerExt, MemoryOutput};
//! use std::sync::Arc;
//!
//! let ctx = Context::new();
//! let buffer = MemoryOutput::new();
//! let log = ctx.create("svc", "warn", Some(Arc::new(buffer.clone())));
//!
//! log.error("disk full");
//! log.warn("retrying");
//! log.info("not shown at warn level");
//!
//! let out = buffer.contents();
//! assert!(out.contains("(ERROR) disk full"));
//! assert!(out.contains("(WARN) retrying"));
//! assert!(!out.contains("(INFO)"));
//! ```
//!
//! ## Process-wide use
//!
//! The free functions in [`global`] work on a lazily created context
//! configured from `SCOPELOG_*` environment variables.

pub mod level;
pub mod flags;
pub mod error;
pub mod output;
pub mod sink;
pub mod repeat;
pub mod registry;
pub mod logger;
pub mod traits;
pub mod context;
pub mod config;
pub mod global;
mod macros;

// Re-export commonly used types
pub use level::{Level, LEVEL_COUNT};
pub use flags::{ElogFlags, Flags};
pub use error::{LogError, LogResult};

pub use output::{
    Output, SharedOutput,
    StderrOutput, StdoutOutput, FileOutput, MemoryOutput, WriterOutput, NoOpOutput,
};

pub use sink::LineSink;
pub use repeat::{RepeatFilter, RepeatDecision};
pub use registry::{Registry, ScopeSummary};
pub use logger::{ScopedLogger, LoggerId};
pub use traits::{Logger, LoggerExt, NoOpLogger, BoxedLogger, SharedLogger};
pub use context::{Context, FATAL_EXIT_CODE};
pub use config::ContextConfig;

pub use global::{
    global, new_logger, new_logger_with_defaults, default_logger,
    logs_on, logs_off, set_active, is_active,
    set_global_level, global_level, set_default_flags, default_flags, set_default_output,
    set_elog_flags, elog_flags,
    list_scoped_logs, list_scopes_and_levels, list_summary,
    scoped_log_by_id, scoped_log_by_scope, set_scope_level_by_id, set_scope_level_by_scope,
};
