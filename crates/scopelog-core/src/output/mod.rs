//! Output destinations
//!
//! A destination receives fully composed lines:
//! - `StderrOutput` / `StdoutOutput`: console streams
//! - `FileOutput`: append-mode file
//! - `MemoryOutput`: in-memory capture for tests and introspection
//! - `WriterOutput`: any `std::io::Write`
//! - `NoOpOutput`: discards everything

mod traits;
mod console;
mod file;
mod memory;
mod noop;
mod writer;

pub use traits::{Output, SharedOutput};
pub use console::{StderrOutput, StdoutOutput};
pub use file::FileOutput;
pub use memory::MemoryOutput;
pub use noop::NoOpOutput;
pub use writer::WriterOutput;
