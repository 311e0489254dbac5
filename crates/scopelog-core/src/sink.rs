//! Line composition
//!
//! `LineSink` is the plain text primitive underneath every scoped logger:
//! it owns the metadata flags, the prefix and the destination, and turns a
//! message plus its call site into one output line.

use std::fmt;
use std::panic::Location;

use chrono::{DateTime, Local, Utc};

use crate::error::LogResult;
use crate::flags::Flags;
use crate::output::SharedOutput;

/// Formatting primitive bound to one destination
#[derive(Clone)]
pub struct LineSink {
    prefix: String,
    flags: Flags,
    output: SharedOutput,
}

impl LineSink {
    pub fn new(output: SharedOutput, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            prefix: prefix.into(),
            flags,
            output,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    pub fn output(&self) -> &SharedOutput {
        &self.output
    }

    pub fn set_output(&mut self, output: SharedOutput) {
        self.output = output;
    }

    /// Compose and write `message` attributed to `location`
    pub fn write(&self, location: &Location<'_>, message: &str) -> LogResult<()> {
        let line = self.compose(location, message);
        self.output.write_line(&line)
    }

    /// Build the full line for `message` without writing it
    pub fn compose(&self, location: &Location<'_>, message: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + message.len() + 64);
        if !self.flags.contains(Flags::MSG_PREFIX) {
            line.push_str(&self.prefix);
        }
        self.push_header(&mut line, location);
        if self.flags.contains(Flags::MSG_PREFIX) {
            line.push_str(&self.prefix);
        }
        line.push_str(message.strip_suffix('\n').unwrap_or(message));
        line
    }

    fn push_header(&self, line: &mut String, location: &Location<'_>) {
        let flags = self.flags;
        if flags.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS) {
            if flags.contains(Flags::UTC) {
                push_timestamp(line, flags, Utc::now());
            } else {
                push_timestamp(line, flags, Local::now());
            }
        }

        if flags.intersects(Flags::LONG_FILE | Flags::SHORT_FILE) {
            let file = if flags.contains(Flags::SHORT_FILE) {
                short_file(location.file())
            } else {
                location.file()
            };
            line.push_str(file);
            line.push(':');
            line.push_str(&location.line().to_string());
            line.push_str(": ");
        }
    }
}

fn push_timestamp<Tz>(line: &mut String, flags: Flags, now: DateTime<Tz>)
where
    Tz: chrono::TimeZone,
    Tz::Offset: fmt::Display,
{
    if flags.contains(Flags::DATE) {
        line.push_str(&now.format("%Y/%m/%d ").to_string());
    }
    if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
        line.push_str(&now.format("%H:%M:%S").to_string());
        if flags.contains(Flags::MICROSECONDS) {
            line.push_str(&now.format("%.6f").to_string());
        }
        line.push(' ');
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

impl fmt::Debug for LineSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
