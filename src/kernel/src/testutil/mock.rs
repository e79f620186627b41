//! In-memory devices.

use crate::input::controller::{DATA_PORT, STATUS_PORT};
use crate::terminal::LineSink;
use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use oops_common::{ColorCode, ControllerStatus, ScreenChar};
use oops_hal::{CursorDevice, PortIo, TextBuffer, TEXT_HEIGHT, TEXT_WIDTH};

/// A text grid in ordinary memory. Starts zeroed (NUL on black), like an
/// adapter nobody has written to yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBuffer {
    chars: [[ScreenChar; TEXT_WIDTH]; TEXT_HEIGHT],
}

impl MemoryBuffer {
    /// A zeroed grid.
    pub fn new() -> Self {
        MemoryBuffer {
            chars: [[ScreenChar::new(0, ColorCode::from_raw(0)); TEXT_WIDTH]; TEXT_HEIGHT],
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ScreenChar> + '_ {
        self.chars.iter().flatten().copied()
    }
}

impl Default for MemoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for MemoryBuffer {
    fn read_cell(&self, row: usize, column: usize) -> ScreenChar {
        self.chars[row][column]
    }

    fn write_cell(&mut self, row: usize, column: usize, cell: ScreenChar) {
        self.chars[row][column] = cell;
    }
}

/// Remembers the last cursor offset and how many times it was set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MockCursor {
    offset: Option<u16>,
    updates: usize,
}

impl MockCursor {
    /// A cursor that was never set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last offset written, `None` before the first update.
    pub fn offset(&self) -> Option<u16> {
        self.offset
    }

    /// Number of `set_offset` calls.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl CursorDevice for MockCursor {
    fn set_offset(&mut self, offset: u16) {
        self.offset = Some(offset);
        self.updates += 1;
    }
}

/// A port space with a scripted keyboard controller.
///
/// Reads of the status port report `OUTPUT_FULL` while scancodes are queued;
/// reads of the data port pop them (or return the last byte again when the
/// queue is empty, as real hardware would). Writes to any port are recorded.
#[derive(Debug, Default, Clone)]
pub struct MockPorts {
    scancodes: VecDeque<u8>,
    last_data: u8,
    writes: Vec<(u16, u8)>,
}

impl MockPorts {
    /// An idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// A controller with `scancodes` waiting, first to last.
    pub fn with_scancodes(scancodes: &[u8]) -> Self {
        MockPorts {
            scancodes: scancodes.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Queues one more scancode.
    pub fn push_scancode(&mut self, scancode: u8) {
        self.scancodes.push_back(scancode);
    }

    /// Number of scancodes not yet read.
    pub fn pending(&self) -> usize {
        self.scancodes.len()
    }

    /// Every `(port, value)` written so far.
    pub fn writes(&self) -> &[(u16, u8)] {
        &self.writes
    }
}

impl PortIo for MockPorts {
    fn read_u8(&mut self, port: u16) -> u8 {
        match port {
            STATUS_PORT if self.scancodes.is_empty() => ControllerStatus::empty().bits(),
            STATUS_PORT => ControllerStatus::OUTPUT_FULL.bits(),
            DATA_PORT => {
                if let Some(scancode) = self.scancodes.pop_front() {
                    self.last_data = scancode;
                }
                self.last_data
            }
            _ => 0xFF,
        }
    }

    fn write_u8(&mut self, port: u16, value: u8) {
        self.writes.push((port, value));
    }
}

/// Keeps every submitted line.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    lines: Vec<String>,
}

impl RecordingSink {
    /// An empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in submission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LineSink for RecordingSink {
    fn line_submitted(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
