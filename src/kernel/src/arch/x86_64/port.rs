//! Raw I/O port access.

use oops_hal::PortIo;
use x86_64::instructions::port::Port;

/// The real x86 I/O port space, accessed with `in`/`out` instructions.
pub struct X86Ports {
    _private: (),
}

impl X86Ports {
    /// Creates a handle to the port space.
    ///
    /// # Safety
    ///
    /// The caller must run in ring 0 (or with IOPL 3) and must be the only
    /// code driving the devices it reaches through this handle.
    pub const unsafe fn new() -> Self {
        X86Ports { _private: () }
    }
}

impl PortIo for X86Ports {
    fn read_u8(&mut self, port: u16) -> u8 {
        // SAFETY: `X86Ports::new` requires I/O privilege and exclusive device
        // ownership. A byte read has no memory side effects.
        unsafe { Port::<u8>::new(port).read() }
    }

    fn write_u8(&mut self, port: u16, value: u8) {
        // SAFETY: as above; the devices written here (CRTC, serial, QEMU exit)
        // do not touch memory the compiler knows about.
        unsafe { Port::<u8>::new(port).write(value) }
    }
}
