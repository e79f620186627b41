//! OopsOS Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines the seams between the console logic and the hardware it
//! drives, so the same logic runs against VGA memory and I/O ports on a real
//! machine and against plain arrays in host tests.

#![no_std]

use oops_common::ScreenChar;

/// Text grid width in cells.
pub const TEXT_WIDTH: usize = 80;

/// Text grid height in cells.
pub const TEXT_HEIGHT: usize = 25;

/// Byte-wide access to the x86 I/O port space.
///
/// Implementations perform exactly one bus transaction per call.
pub trait PortIo {
    /// Reads one byte from `port`.
    fn read_u8(&mut self, port: u16) -> u8;
    /// Writes one byte to `port`.
    fn write_u8(&mut self, port: u16, value: u8);
}

/// A row-major `TEXT_WIDTH` x `TEXT_HEIGHT` grid of character cells.
///
/// Coordinates outside the grid are a caller contract violation.
pub trait TextBuffer {
    /// Reads the cell at (`row`, `column`).
    fn read_cell(&self, row: usize, column: usize) -> ScreenChar;
    /// Writes the cell at (`row`, `column`).
    fn write_cell(&mut self, row: usize, column: usize, cell: ScreenChar);
}

/// The blinking hardware cursor.
pub trait CursorDevice {
    /// Moves the cursor to the linear cell offset `row * TEXT_WIDTH + column`.
    ///
    /// One call is one indivisible update of the device.
    fn set_offset(&mut self, offset: u16);
}

/// Trait for a text-based console output.
pub trait Console {
    /// Writes a string to the console.
    fn write_str(&mut self, s: &str);
    /// Clears the console screen.
    fn clear(&mut self);
}
