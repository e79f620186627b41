//! Captured input lines and the hand-off point for completed ones.

use oops_common::LineError;

/// Maximum captured line length.
pub const MAX_LINE_LENGTH: usize = 256;

/// Receives each line the user submits with Enter.
///
/// This is where a command interpreter plugs in. The shell only echoes; it
/// never parses or executes what it hands over.
pub trait LineSink {
    /// Called with the text typed since the previous submit, without the
    /// trailing newline.
    fn line_submitted(&mut self, line: &str);
}

/// Discards submitted lines.
impl LineSink for () {
    fn line_submitted(&mut self, _line: &str) {}
}

/// Reports submitted lines to the kernel log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLines;

impl LineSink for LogLines {
    fn line_submitted(&mut self, line: &str) {
        log::info!("line submitted: {:?}", line);
    }
}

/// Fixed-capacity line text. No heap.
#[derive(Clone)]
pub struct LineBuffer {
    bytes: [u8; MAX_LINE_LENGTH],
    len: usize,
}

impl LineBuffer {
    /// Creates an empty line.
    pub const fn new() -> Self {
        LineBuffer {
            bytes: [0; MAX_LINE_LENGTH],
            len: 0,
        }
    }

    /// Appends a byte.
    pub fn push(&mut self, byte: u8) -> Result<(), LineError> {
        let slot = self.bytes.get_mut(self.len).ok_or(LineError::Full)?;
        *slot = byte;
        self.len += 1;
        Ok(())
    }

    /// The captured text. Only scancode table output is pushed, which is
    /// ASCII, so this is never lossy in practice.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }

    /// Captured bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing is captured.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops the captured text.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
