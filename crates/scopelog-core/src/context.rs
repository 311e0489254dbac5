//! Global controls and the default logger
//!
//! A `Context` bundles everything that is process-wide in a classic logging
//! package: the master switch, the global level override, defaults for new
//! loggers, the registry and the default (unscoped) logger. Initialization
//! order is controls, then registry, then default logger.
//!
//! ```
//! use scopelog_core::{Context, LoggerExt};
//!
//! let ctx = Context::new();
//! let log = ctx.create_with_defaults("worker");
//! log.info("started");
//! ctx.set_global_level("trace");
//! log.trace("visible through the global override");
//! log.dispose();
//! ```

use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::ContextConfig;
use crate::flags::{ElogFlags, Flags};
use crate::level::Level;
use crate::logger::ScopedLogger;
use crate::output::{Output, SharedOutput, StderrOutput};
use crate::registry::Registry;
use crate::sink::LineSink;

/// Exit status used by the fatal family
pub const FATAL_EXIT_CODE: i32 = 1;

/// Hot-path switches shared by every logger of a context
pub(crate) struct Controls {
    active: AtomicBool,
    global_level: AtomicU8,
    default_flags: AtomicU32,
    elog_flags: AtomicU32,
    default_output: RwLock<SharedOutput>,
}

impl Controls {
    fn new(config: &ContextConfig) -> Self {
        Self {
            active: AtomicBool::new(config.active),
            global_level: AtomicU8::new(config.global_level.rank()),
            default_flags: AtomicU32::new(config.default_flags.bits()),
            elog_flags: AtomicU32::new(config.elog_flags.bits()),
            default_output: RwLock::new(Arc::new(StderrOutput::new())),
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    pub(crate) fn global_level(&self) -> Level {
        Level::from_rank(self.global_level.load(Ordering::Relaxed))
    }

    pub(crate) fn elog_flags(&self) -> ElogFlags {
        ElogFlags::from_bits(self.elog_flags.load(Ordering::Relaxed))
    }

    pub(crate) fn suppress_repeats(&self) -> bool {
        self.elog_flags().contains(ElogFlags::SUPPRESS_REPEATS)
    }

    fn default_flags(&self) -> Flags {
        Flags::from_bits(self.default_flags.load(Ordering::Relaxed))
    }
}

struct ContextShared {
    controls: Arc<Controls>,
    registry: Arc<Registry>,
    default_logger: ScopedLogger,
}

/// Explicitly constructed logging context
///
/// Cloning is cheap; clones share all state.
#[derive(Clone)]
pub struct Context {
    shared: Arc<ContextShared>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Context with default controls, ignoring the environment
    pub fn new() -> Self {
        Self::with_config(ContextConfig::default())
    }

    /// Context initialized from `config`
    pub fn with_config(config: ContextConfig) -> Self {
        let controls = Arc::new(Controls::new(&config));
        let registry = Arc::new(Registry::new());

        // The default logger is not registered: it never shows up in listings
        let default_logger = ScopedLogger::new_pinned(
            "",
            Level::Trace,
            LineSink::new(Arc::new(StderrOutput::new()), "", config.default_flags),
            Arc::clone(&controls),
        );

        Self {
            shared: Arc::new(ContextShared {
                controls,
                registry,
                default_logger,
            }),
        }
    }

    /// Create and register a scoped logger
    ///
    /// An empty `level` means info; `None` output means the current default.
    pub fn create(&self, scope: &str, level: &str, output: Option<SharedOutput>) -> ScopedLogger {
        let level = if level.is_empty() { Level::Info } else { Level::parse(level) };
        let controls = &self.shared.controls;
        let output = output.unwrap_or_else(|| controls.default_output.read().clone());
        let sink = LineSink::new(output, scope, controls.default_flags());

        let logger = ScopedLogger::new(
            scope,
            level,
            sink,
            Arc::clone(controls),
            Arc::downgrade(&self.shared.registry),
        );
        self.shared.registry.register(&logger);
        logger
    }

    /// Create a logger at info level writing to the default output
    pub fn create_with_defaults(&self, scope: &str) -> ScopedLogger {
        self.create(scope, "info", None)
    }

    /// Live scoped loggers of this context
    pub fn registry(&self) -> &Registry {
        &self.shared.registry
    }

    /// The unscoped logger (level trace, standard error)
    ///
    /// It cannot be disposed, so the fatal and panic families always have
    /// somewhere to write.
    pub fn default_logger(&self) -> &ScopedLogger {
        &self.shared.default_logger
    }

    /// Master switch for every logger of this context
    pub fn set_active(&self, active: bool) {
        self.shared.controls.active.store(active, Ordering::Relaxed);
    }

    /// Whether output is currently enabled
    pub fn is_active(&self) -> bool {
        self.shared.controls.is_active()
    }

    /// Resume output at every logger's own level
    pub fn logs_on(&self) {
        self.set_active(true);
    }

    /// Silence every logger of this context
    pub fn logs_off(&self) {
        self.set_active(false);
    }

    /// Set the override level; `Disabled` removes the override
    pub fn set_global_level(&self, level: impl Into<Level>) {
        self.shared
            .controls
            .global_level
            .store(level.into().rank(), Ordering::Relaxed);
    }

    /// Current override level; `Disabled` when none
    pub fn global_level(&self) -> Level {
        self.shared.controls.global_level()
    }

    /// Flags for loggers created after this call
    pub fn set_default_flags(&self, flags: Flags) {
        self.shared
            .controls
            .default_flags
            .store(flags.bits(), Ordering::Relaxed);
    }

    /// Flags new loggers start with
    pub fn default_flags(&self) -> Flags {
        self.shared.controls.default_flags()
    }

    /// Output for loggers created after this call
    pub fn set_default_output(&self, output: SharedOutput) {
        *self.shared.controls.default_output.write() = output;
    }

    /// Output new loggers write to when none is given
    pub fn default_output(&self) -> SharedOutput {
        self.shared.controls.default_output.read().clone()
    }

    /// Replace every behavior switch at once
    pub fn set_elog_flags(&self, flags: ElogFlags) {
        self.shared
            .controls
            .elog_flags
            .store(flags.bits(), Ordering::Relaxed);
    }

    /// Current behavior switches
    pub fn elog_flags(&self) -> ElogFlags {
        self.shared.controls.elog_flags()
    }

    /// Toggle repeat suppression for every logger
    pub fn set_suppress_repeats(&self, enabled: bool) {
        self.update_elog_flag(ElogFlags::SUPPRESS_REPEATS, enabled);
    }

    /// Toggle plain, untagged default-logger prints
    pub fn set_mimic_std_log(&self, enabled: bool) {
        self.update_elog_flag(ElogFlags::MIMIC_STD_LOG, enabled);
    }

    fn update_elog_flag(&self, flag: ElogFlags, enabled: bool) {
        // The closure always returns Some, so this cannot fail
        self.shared
            .controls
            .elog_flags
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
                Some(ElogFlags::from_bits(bits).with(flag, enabled).bits())
            })
            .ok();
    }

    fn mimics_std_log(&self) -> bool {
        self.elog_flags().contains(ElogFlags::MIMIC_STD_LOG)
    }

    /// Print through the default logger, ignoring its level
    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) {
        self.default_print("Print", Location::caller(), format_args!("{}", message));
    }

    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.default_print("Printf", Location::caller(), args);
    }

    #[track_caller]
    pub fn println(&self, message: impl fmt::Display) {
        self.default_print("Println", Location::caller(), format_args!("{}", message));
    }

    fn default_print(&self, tag: &str, location: &'static Location<'static>, args: fmt::Arguments<'_>) {
        let logger = self.default_logger();
        if self.mimics_std_log() {
            logger.write_raw(location, &args.to_string()).ok();
        } else {
            logger.print_tagged(tag, location, args);
        }
    }

    /// Write through the default logger, then exit the process
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.fatal_at(Location::caller(), format_args!("{}", message))
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal_at(Location::caller(), args)
    }

    #[track_caller]
    pub fn fatalln(&self, message: impl fmt::Display) -> ! {
        self.fatal_at(Location::caller(), format_args!("{}", message))
    }

    fn fatal_at(&self, location: &'static Location<'static>, args: fmt::Arguments<'_>) -> ! {
        self.write_last_resort(location, &args.to_string());
        self.default_logger().flush();
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Write through the default logger, then panic with the message
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        self.panic_at(Location::caller(), format_args!("{}", message))
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.panic_at(Location::caller(), args)
    }

    #[track_caller]
    pub fn panicln(&self, message: impl fmt::Display) -> ! {
        self.panic_at(Location::caller(), format_args!("{}", message))
    }

    #[track_caller]
    fn panic_at(&self, location: &'static Location<'static>, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.write_last_resort(location, &message);
        panic!("{}", message)
    }

    /// Unfiltered write through the default logger, falling back to stderr
    fn write_last_resort(&self, location: &'static Location<'static>, message: &str) {
        if self.default_logger().write_raw(location, message).is_err() {
            StderrOutput::new().write_line(message).ok();
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("active", &self.is_active())
            .field("global_level", &self.global_level())
            .field("elog_flags", &self.elog_flags())
            .field("registry", &self.shared.registry)
            .finish()
    }
}
