//! In-memory output

use std::sync::Arc;

use parking_lot::Mutex;

use super::traits::Output;
use crate::error::LogResult;

/// In-memory output capturing every written line
///
/// Clones share the same buffer, so one handle can be given to a logger
/// while another is kept for inspection.
///
/// # Example
///
/// ```
/// use scopelog_core::{Context, LoggerExt, MemoryOutput};
/// use std::sync::Arc;
///
/// let ctx = Context::new();
/// let buffer = MemoryOutput::new();
/// let log = ctx.create("svc", "warn", Some(Arc::new(buffer.clone())));
/// log.error("boom");
/// assert!(buffer.contents().contains("boom"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryOutput {
    /// Empty capture buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Captured lines joined with newlines, each newline-terminated
    pub fn contents(&self) -> String {
        let lines = self.lines.lock();
        let mut out = String::new();
        for line in lines.iter() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Number of captured lines
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Whether nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every captured line
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Output for MemoryOutput {
    fn write_line(&self, line: &str) -> LogResult<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_output_capture() {
        let output = MemoryOutput::new();
        assert!(output.is_empty());

        output.write_line("first").unwrap();
        output.write_line("second").unwrap();

        assert_eq!(output.len(), 2);
        assert_eq!(output.lines(), vec!["first", "second"]);
        assert_eq!(output.contents(), "first\nsecond\n");

        output.clear();
        assert!(output.is_empty());
    }

    #[test]
    fn test_memory_output_clones_share_buffer() {
        let output = MemoryOutput::new();
        let handle = output.clone();
        handle.write_line("shared").unwrap();
        assert_eq!(output.lines(), vec!["shared"]);
    }

    #[test]
    fn test_memory_output_thread_safety() {
        use std::thread;

        let output = MemoryOutput::new();
        let mut handles = vec![];

        for i in 0..10 {
            let output_clone = output.clone();
            handles.push(thread::spawn(move || {
                output_clone.write_line(&format!("line_{}", i)).unwrap();
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(output.len(), 10);
    }
}
