//! Context configuration
//!
//! Environment variables override the defaults when the process-wide
//! context is created:
//! - `SCOPELOG_ACTIVE`: "0", "false" or "off" silences all output
//! - `SCOPELOG_GLOBAL_LEVEL`: level text for the global override
//! - `SCOPELOG_SUPPRESS_REPEATS`: "1" or "true" enables repeat suppression

use serde::{Deserialize, Serialize};

use crate::flags::{ElogFlags, Flags};
use crate::level::Level;

pub const ENV_ACTIVE: &str = "SCOPELOG_ACTIVE";
pub const ENV_GLOBAL_LEVEL: &str = "SCOPELOG_GLOBAL_LEVEL";
pub const ENV_SUPPRESS_REPEATS: &str = "SCOPELOG_SUPPRESS_REPEATS";

/// Initial values of a context's global controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Master switch for all output
    pub active: bool,
    /// Process-wide override; `Disabled` means none
    pub global_level: Level,
    /// Flags given to newly created loggers
    pub default_flags: Flags,
    pub elog_flags: ElogFlags,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            active: true,
            global_level: Level::Disabled,
            default_flags: Flags::default_logger(),
            elog_flags: ElogFlags::MIMIC_STD_LOG,
        }
    }
}

impl ContextConfig {
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_global_level(mut self, level: impl Into<Level>) -> Self {
        self.global_level = level.into();
        self
    }

    pub fn with_default_flags(mut self, flags: Flags) -> Self {
        self.default_flags = flags;
        self
    }

    pub fn with_elog_flags(mut self, flags: ElogFlags) -> Self {
        self.elog_flags = flags;
        self
    }

    /// Defaults overridden from the process environment
    pub fn from_env() -> Self {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps variable names to values
    pub fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup(ENV_ACTIVE) {
            let value = value.trim().to_lowercase();
            self.active = !matches!(value.as_str(), "0" | "false" | "off" | "no");
        }
        if let Some(value) = lookup(ENV_GLOBAL_LEVEL) {
            self.global_level = Level::parse(&value);
        }
        if let Some(value) = lookup(ENV_SUPPRESS_REPEATS) {
            let value = value.trim().to_lowercase();
            let enabled = value == "1" || value == "true";
            self.elog_flags = self.elog_flags.with(ElogFlags::SUPPRESS_REPEATS, enabled);
        }
        self
    }
}
