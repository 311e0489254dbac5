//! Scoped logger instances
//!
//! A `ScopedLogger` is a cheap, cloneable handle to one scope. Clones share
//! the same level, sink and repeat memory. Leveled calls come from the
//! `Logger`/`LoggerExt` traits; the print family lives here as inherent
//! methods because it bypasses level filtering.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic::Location;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use crate::context::Controls;
use crate::error::{LogError, LogResult};
use crate::flags::Flags;
use crate::level::Level;
use crate::output::SharedOutput;
use crate::registry::Registry;
use crate::repeat::{RepeatDecision, RepeatFilter};
use crate::sink::LineSink;
use crate::traits::Logger;

static NEXT_NONCE: AtomicU64 = AtomicU64::new(1);

/// Opaque logger identity
///
/// Derived from the scope and a process-wide creation nonce; regenerated
/// whenever the logger's parameters are modified.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoggerId(String);

impl LoggerId {
    fn generate(scope: &str) -> (u64, Self) {
        let nonce = NEXT_NONCE.fetch_add(1, Ordering::Relaxed);
        let mut hasher = DefaultHasher::new();
        scope.hash(&mut hasher);
        nonce.hash(&mut hasher);
        (nonce, Self(format!("{:016x}{:08x}", hasher.finish(), nonce)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

struct LoggerState {
    scope: String,
    id: LoggerId,
    /// `None` once disposed
    sink: Option<LineSink>,
}

struct LoggerInner {
    key: u64,
    level: AtomicU8,
    state: RwLock<LoggerState>,
    repeat: Mutex<RepeatFilter>,
    controls: Arc<Controls>,
    registry: Weak<Registry>,
    /// Pinned loggers ignore `dispose`
    pinned: bool,
}

/// Handle to one logging scope
#[derive(Clone)]
pub struct ScopedLogger {
    inner: Arc<LoggerInner>,
}

impl ScopedLogger {
    pub(crate) fn new(
        scope: &str,
        level: Level,
        sink: LineSink,
        controls: Arc<Controls>,
        registry: Weak<Registry>,
    ) -> Self {
        Self::build(scope, level, sink, controls, registry, false)
    }

    /// Default-logger constructor: unregistered and never disposed
    pub(crate) fn new_pinned(scope: &str, level: Level, sink: LineSink, controls: Arc<Controls>) -> Self {
        Self::build(scope, level, sink, controls, Weak::new(), true)
    }

    fn build(
        scope: &str,
        level: Level,
        sink: LineSink,
        controls: Arc<Controls>,
        registry: Weak<Registry>,
        pinned: bool,
    ) -> Self {
        let (key, id) = LoggerId::generate(scope);
        Self {
            inner: Arc::new(LoggerInner {
                key,
                level: AtomicU8::new(level.rank()),
                state: RwLock::new(LoggerState {
                    scope: scope.to_string(),
                    id,
                    sink: Some(sink),
                }),
                repeat: Mutex::new(RepeatFilter::new()),
                controls,
                registry,
                pinned,
            }),
        }
    }

    pub(crate) fn key(&self) -> u64 {
        self.inner.key
    }

    /// Scope name, also used as the line prefix
    pub fn scope(&self) -> String {
        self.inner.state.read().scope.clone()
    }

    /// Current identity, as used by registry lookups
    pub fn id(&self) -> LoggerId {
        self.inner.state.read().id.clone()
    }

    /// Current level
    pub fn level(&self) -> Level {
        Level::from_rank(self.inner.level.load(Ordering::Relaxed))
    }

    /// Replace the level; unknown text means `Disabled`
    pub fn set_level(&self, level: impl Into<Level>) {
        self.inner.level.store(level.into().rank(), Ordering::Relaxed);
    }

    /// Advance one rank, wrapping from `Trace` to `Disabled`
    pub fn cycle_level_up(&self) {
        self.step_level(Level::cycle_up);
    }

    /// Retreat one rank, wrapping from `Disabled` to `Trace`
    pub fn cycle_level_down(&self) {
        self.step_level(Level::cycle_down);
    }

    fn step_level(&self, step: fn(Level) -> Level) {
        // The closure always returns Some, so this cannot fail
        self.inner
            .level
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |rank| {
                Some(step(Level::from_rank(rank)).rank())
            })
            .ok();
    }

    /// Metadata flags; empty once disposed
    pub fn flags(&self) -> Flags {
        self.inner
            .state
            .read()
            .sink
            .as_ref()
            .map(LineSink::flags)
            .unwrap_or_default()
    }

    /// Replace the metadata flags
    pub fn set_flags(&self, flags: Flags) {
        if let Some(sink) = self.inner.state.write().sink.as_mut() {
            sink.set_flags(flags);
        }
    }

    /// Replace the destination, keeping flags and prefix
    pub fn set_output(&self, output: SharedOutput) {
        if let Some(sink) = self.inner.state.write().sink.as_mut() {
            sink.set_output(output);
        }
    }

    /// Change any subset of scope, level and output in place
    ///
    /// The identity is regenerated and the registry entry follows the new
    /// scope. Has no effect on a disposed logger.
    pub fn modify_params(&self, scope: Option<&str>, level: Option<Level>, output: Option<SharedOutput>) {
        let (scope, id) = {
            let mut state = self.inner.state.write();
            let LoggerState { scope: current, id, sink } = &mut *state;
            let Some(sink) = sink.as_mut() else {
                return;
            };
            if let Some(scope) = scope {
                *current = scope.to_string();
                sink.set_prefix(scope);
            }
            if let Some(output) = output {
                sink.set_output(output);
            }
            *id = LoggerId::generate(current).1;
            (current.clone(), id.clone())
        };

        if let Some(level) = level {
            self.set_level(level);
        }
        if let Some(registry) = self.inner.registry.upgrade() {
            registry.update(self.inner.key, &scope, &id);
        }
    }

    /// Deregister and release the output
    ///
    /// Every later emission on this logger (or its clones) is a silent no-op.
    /// The default logger of a context is pinned and ignores this call.
    pub fn dispose(&self) {
        if self.inner.pinned {
            return;
        }
        if let Some(registry) = self.inner.registry.upgrade() {
            registry.deregister(self.inner.key);
        }
        self.inner.state.write().sink = None;
        self.inner.level.store(Level::Disabled.rank(), Ordering::Relaxed);
        self.inner.repeat.lock().reset();
    }

    /// Whether `dispose` has released this logger
    pub fn is_disposed(&self) -> bool {
        self.inner.state.read().sink.is_none()
    }

    /// Print without level filtering, tagged `(Print)`
    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) {
        self.print_tagged("Print", Location::caller(), format_args!("{}", message));
    }

    /// Formatted print without level filtering, tagged `(Printf)`
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.print_tagged("Printf", Location::caller(), args);
    }

    /// Print without level filtering, tagged `(Println)`
    #[track_caller]
    pub fn println(&self, message: impl fmt::Display) {
        self.print_tagged("Println", Location::caller(), format_args!("{}", message));
    }

    pub(crate) fn print_tagged(&self, tag: &str, location: &'static Location<'static>, args: fmt::Arguments<'_>) {
        if !self.inner.controls.is_active() {
            return;
        }
        self.emit(location, format!(" ({}) {}", tag, args));
    }

    /// Write `message` as-is, bypassing every filter
    #[track_caller]
    pub fn try_output(&self, message: &str) -> LogResult<()> {
        self.write(Location::caller(), message)
    }

    pub(crate) fn write_raw(&self, location: &'static Location<'static>, message: &str) -> LogResult<()> {
        self.write(location, message)
    }

    pub(crate) fn flush(&self) {
        if let Some(sink) = self.inner.state.read().sink.as_ref() {
            let _ = sink.output().flush();
        }
    }

    fn emit(&self, location: &'static Location<'static>, message: String) {
        if !self.inner.controls.suppress_repeats() {
            let _ = self.write(location, &message);
            return;
        }

        // Held across the write so indicator lines keep their order
        let mut repeat = self.inner.repeat.lock();
        let _ = match repeat.observe(&message) {
            RepeatDecision::Emit => self.write(location, &message),
            RepeatDecision::Indicator(text) => self.write(location, &text),
            RepeatDecision::Suppress => Ok(()),
        };
    }

    fn write(&self, location: &'static Location<'static>, message: &str) -> LogResult<()> {
        let state = self.inner.state.read();
        match state.sink.as_ref() {
            Some(sink) => sink.write(location, message),
            None => Err(LogError::disposed(state.scope.as_str())),
        }
    }
}

impl Logger for ScopedLogger {
    fn enabled(&self, level: Level) -> bool {
        let controls = &self.inner.controls;
        if !controls.is_active() {
            return false;
        }
        if level.is_within(self.level()) {
            return true;
        }
        let global = controls.global_level();
        global > Level::Disabled && level.is_within(global)
    }

    fn log_at(&self, level: Level, location: &'static Location<'static>, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.emit(location, format!(" ({}) {}", level.label(), args));
    }
}

impl PartialEq for ScopedLogger {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for ScopedLogger {}

impl fmt::Display for ScopedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read();
        write!(f, "[{}:{}:({})]", state.id, state.scope, self.level())
    }
}

impl fmt::Debug for ScopedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("ScopedLogger")
            .field("scope", &state.scope)
            .field("id", &state.id)
            .field("level", &self.level())
            .field("disposed", &state.sink.is_none())
            .finish()
    }
}
