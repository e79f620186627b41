//! VGA text mode buffer for x86_64.
//!
//! Raw volatile access to the 80x25 cell grid at 0xB8000. Cursor tracking and
//! character emission live in [`crate::display`].

use core::ptr;
use oops_common::ScreenChar;
use oops_hal::{TextBuffer, TEXT_HEIGHT, TEXT_WIDTH};

/// VGA text buffer memory-mapped I/O address.
pub const VGA_BUFFER_ADDR: usize = 0xB8000;

/// The VGA text buffer layout.
#[repr(transparent)]
struct Buffer {
    chars: [[ScreenChar; TEXT_WIDTH]; TEXT_HEIGHT],
}

/// The hardware text buffer.
pub struct VgaBuffer {
    /// SAFETY: valid for the lifetime of the kernel. The VGA buffer at 0xB8000
    /// is always mapped (identity or via the bootloader) in text mode.
    buffer: *mut Buffer,
}

// SAFETY: VgaBuffer only touches the VGA buffer through volatile operations,
// and `new` requires a single owner.
unsafe impl Send for VgaBuffer {}

impl VgaBuffer {
    /// Takes ownership of the VGA text buffer.
    ///
    /// # Safety
    ///
    /// 0xB8000 must be mapped at the same virtual address, and no other
    /// `VgaBuffer` may be alive while this one is used.
    pub const unsafe fn new() -> Self {
        VgaBuffer {
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
        }
    }
}

impl TextBuffer for VgaBuffer {
    fn read_cell(&self, row: usize, column: usize) -> ScreenChar {
        // SAFETY: the pointer is valid per `new`; indexing panics rather than
        // leaving the buffer. Volatile because the adapter owns this memory.
        unsafe { ptr::read_volatile(&(*self.buffer).chars[row][column]) }
    }

    fn write_cell(&mut self, row: usize, column: usize, cell: ScreenChar) {
        // SAFETY: as in `read_cell`.
        unsafe { ptr::write_volatile(&mut (*self.buffer).chars[row][column], cell) }
    }
}
