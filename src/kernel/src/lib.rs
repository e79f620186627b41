//! OopsOS Kernel
//!
//! The text console of a minimal x86_64 kernel: a VGA text display, a polled
//! PS/2 keyboard and a shell that echoes what is typed.
//!
//! # Architecture
//!
//! - `arch`: platform code (VGA memory, port I/O, serial)
//! - `display`: the character grid and hardware cursor
//! - `input`: keyboard controller polling and scancode decoding
//! - `terminal`: the welcome/read-loop shell
//! - `boot`: welcome screen
//!
//! Hardware is reached only through the `oops-hal` traits, so everything above
//! `arch` runs unchanged against the in-memory devices in `testutil::mock`.
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(any(test, feature = "test"))]
extern crate alloc;

pub mod arch;
pub mod boot;
pub mod config;
pub mod display;
pub mod input;
pub mod logger;
pub mod terminal;
pub mod testutil;

use arch::x86_64::{VgaBuffer, X86Ports};
use display::{CrtcCursor, Display};
use input::Ps2Controller;

/// The display on real hardware.
pub type VgaDisplay = Display<VgaBuffer, CrtcCursor<X86Ports>>;

/// The keyboard on real hardware.
pub type Keyboard = Ps2Controller<X86Ports>;

/// Initializes core kernel subsystems: the serial log, then the devices.
///
/// # Safety
///
/// Must be called once, in ring 0, with 0xB8000 mapped. The returned devices
/// are the only owners of the VGA buffer, the CRTC and the PS/2 controller.
pub unsafe fn init() -> (VgaDisplay, Keyboard) {
    if let Err(err) = logger::init(config::LOG_LEVEL) {
        serial_println!("logger: {}", err);
    }

    // SAFETY: forwarded from the caller.
    let display = unsafe { Display::new(VgaBuffer::new(), CrtcCursor::new(X86Ports::new())) };
    // SAFETY: as above; the controller ports do not overlap the CRTC ports.
    let keyboard = unsafe { Ps2Controller::new(X86Ports::new()) };
    log::info!("console devices ready");
    (display, keyboard)
}
