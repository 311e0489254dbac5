//! Formatting and behavior flag sets

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use serde::{Deserialize, Serialize};

/// Metadata flags controlling the header of each written line
///
/// The bit values follow the classic `log` package layout so that callers
/// porting existing flag masks keep their meaning.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Flags(u32);

impl Flags {
    /// Date in the local time zone: 2009/01/23
    pub const DATE: Flags = Flags(1);
    /// Time in the local time zone: 01:23:23
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: 01:23:23.123123 (implies TIME)
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full file path and line number
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final file name element and line number, overrides LONG_FILE
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC rather than the local time zone
    pub const UTC: Flags = Flags(1 << 5);
    /// Move the prefix from the beginning of the line to before the message
    pub const MSG_PREFIX: Flags = Flags(1 << 6);
    /// DATE | TIME
    pub const STD: Flags = Flags(1 | (1 << 1));

    pub const fn empty() -> Self {
        Flags(0)
    }

    /// Flags given to new loggers unless overridden
    pub const fn default_logger() -> Self {
        Flags(Self::DATE.0 | Self::MICROSECONDS.0 | Self::LONG_FILE.0 | Self::UTC.0 | Self::MSG_PREFIX.0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Flags(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl Not for Flags {
    type Output = Flags;

    fn not(self) -> Flags {
        Flags(!self.0)
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flags({:#x})", self.0)
    }
}

/// Behavior switches of the leveled layer itself
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElogFlags(u32);

impl ElogFlags {
    /// Collapse consecutive identical messages into periodic "repeated" lines
    pub const SUPPRESS_REPEATS: ElogFlags = ElogFlags(1);
    /// Default logger print calls behave exactly like the plain line primitive
    pub const MIMIC_STD_LOG: ElogFlags = ElogFlags(1 << 1);

    pub const fn empty() -> Self {
        ElogFlags(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        ElogFlags(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: ElogFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Copy with `other` set or cleared
    pub const fn with(self, other: ElogFlags, enabled: bool) -> Self {
        if enabled {
            ElogFlags(self.0 | other.0)
        } else {
            ElogFlags(self.0 & !other.0)
        }
    }
}

impl BitOr for ElogFlags {
    type Output = ElogFlags;

    fn bitor(self, rhs: ElogFlags) -> ElogFlags {
        ElogFlags(self.0 | rhs.0)
    }
}

impl fmt::Debug for ElogFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElogFlags")
            .field("suppress_repeats", &self.contains(Self::SUPPRESS_REPEATS))
            .field("mimic_std_log", &self.contains(Self::MIMIC_STD_LOG))
            .finish()
    }
}
