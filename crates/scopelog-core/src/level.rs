//! Severity levels
//!
//! Levels are ordered `Disabled < Error < Warning < Info < Verbose < Trace`.
//! A logger set to a level emits every message at that level or below it.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Log severity level
///
/// `Disabled` produces no leveled output, `Trace` is the most permissive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Disabled = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Verbose = 4,
    Trace = 5,
}

/// Number of ranks, used for cyclic level stepping
pub const LEVEL_COUNT: u8 = 6;

impl Level {
    /// Parse level text, case-insensitive
    ///
    /// Accepts the full names and the short forms (`err`, `wrn`/`warn`,
    /// `inf`, `vrb`, `trc`). Anything unrecognized resolves to `Disabled`.
    ///
    /// ```
    /// use scopelog_core::Level;
    ///
    /// assert_eq!(Level::parse("WARN"), Level::Warning);
    /// assert_eq!(Level::parse("bogus"), Level::Disabled);
    /// ```
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "err" | "error" => Level::Error,
            "wrn" | "warn" | "warning" => Level::Warning,
            "inf" | "info" => Level::Info,
            "vrb" | "verbose" => Level::Verbose,
            "trc" | "trace" => Level::Trace,
            _ => Level::Disabled,
        }
    }

    /// Canonical header label for level text (`"warning"` -> `"WARN"`)
    pub fn normalize(text: &str) -> &'static str {
        Self::parse(text).label()
    }

    /// Uppercase label used in emitted headers
    pub fn label(self) -> &'static str {
        match self {
            Level::Disabled => "DISABLE",
            Level::Error => "ERROR",
            Level::Warning => "WARN",
            Level::Info => "INFO",
            Level::Verbose => "VERBOSE",
            Level::Trace => "TRACE",
        }
    }

    /// Display name (`"Warning"`)
    pub fn name(self) -> &'static str {
        match self {
            Level::Disabled => "Disabled",
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Info => "Info",
            Level::Verbose => "Verbose",
            Level::Trace => "Trace",
        }
    }

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Level for a rank; out-of-range ranks wrap modulo the number of ranks
    pub fn from_rank(rank: u8) -> Self {
        match rank % LEVEL_COUNT {
            0 => Level::Disabled,
            1 => Level::Error,
            2 => Level::Warning,
            3 => Level::Info,
            4 => Level::Verbose,
            _ => Level::Trace,
        }
    }

    /// Next rank, wrapping from `Trace` to `Disabled`
    pub fn cycle_up(self) -> Self {
        Self::from_rank(self.rank() + 1)
    }

    /// Previous rank, wrapping from `Disabled` to `Trace`
    pub fn cycle_down(self) -> Self {
        Self::from_rank(self.rank() + LEVEL_COUNT - 1)
    }

    /// Whether a message at `self` passes a threshold of `threshold`
    pub fn is_within(self, threshold: Level) -> bool {
        self != Level::Disabled && self <= threshold
    }

    /// All levels in rank order
    pub fn all() -> [Level; LEVEL_COUNT as usize] {
        [
            Level::Disabled,
            Level::Error,
            Level::Warning,
            Level::Info,
            Level::Verbose,
            Level::Trace,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Level {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<&String> for Level {
    fn from(text: &String) -> Self {
        Self::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Disabled < Level::Error);
        assert!(Level::Error < Level::Warning);
        assert!(Level::Warning < Level::Info);
        assert!(Level::Info < Level::Verbose);
        assert!(Level::Verbose < Level::Trace);
    }

    #[test]
    fn test_parse_names_and_abbreviations() {
        assert_eq!(Level::parse("error"), Level::Error);
        assert_eq!(Level::parse("ERR"), Level::Error);
        assert_eq!(Level::parse("wrn"), Level::Warning);
        assert_eq!(Level::parse("Warn"), Level::Warning);
        assert_eq!(Level::parse("warning"), Level::Warning);
        assert_eq!(Level::parse("inf"), Level::Info);
        assert_eq!(Level::parse("INFO"), Level::Info);
        assert_eq!(Level::parse("vrb"), Level::Verbose);
        assert_eq!(Level::parse("verbose"), Level::Verbose);
        assert_eq!(Level::parse("trc"), Level::Trace);
        assert_eq!(Level::parse("TRACE"), Level::Trace);
    }

    #[test]
    fn test_parse_unknown_is_disabled() {
        assert_eq!(Level::parse("bogus"), Level::Disabled);
        assert_eq!(Level::parse(""), Level::Disabled);
        assert_eq!(Level::parse("disabled"), Level::Disabled);
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Disabled);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(Level::normalize("err"), "ERROR");
        assert_eq!(Level::normalize("warning"), "WARN");
        assert_eq!(Level::normalize("inf"), "INFO");
        assert_eq!(Level::normalize("vrb"), "VERBOSE");
        assert_eq!(Level::normalize("trc"), "TRACE");
        assert_eq!(Level::normalize("nope"), "DISABLE");
    }

    #[test]
    fn test_cycle_closure() {
        for start in Level::all() {
            let mut up = start;
            let mut down = start;
            for _ in 0..LEVEL_COUNT {
                up = up.cycle_up();
                down = down.cycle_down();
            }
            assert_eq!(up, start);
            assert_eq!(down, start);
        }
        assert_eq!(Level::Disabled.cycle_down(), Level::Trace);
        assert_eq!(Level::Trace.cycle_up(), Level::Disabled);
    }

    #[test]
    fn test_is_within() {
        assert!(Level::Error.is_within(Level::Warning));
        assert!(Level::Warning.is_within(Level::Warning));
        assert!(!Level::Info.is_within(Level::Warning));
        assert!(!Level::Disabled.is_within(Level::Trace));
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(Level::Warning.to_string(), "Warning");
        assert_eq!(serde_json::to_string(&Level::Verbose).unwrap(), "\"verbose\"");
        let parsed: Level = serde_json::from_str("\"trace\"").unwrap();
        assert_eq!(parsed, Level::Trace);
    }
}
