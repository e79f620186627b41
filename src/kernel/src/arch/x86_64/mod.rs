//! x86_64 architecture support.
//!
//! Provides the VGA text buffer, raw port I/O and the COM1 serial port.

pub mod port;
pub mod serial;
pub mod vga;

pub use port::X86Ports;
pub use serial::SERIAL;
pub use vga::VgaBuffer;

/// Halts the CPU until the next interrupt.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
