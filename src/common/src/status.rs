//! PS/2 controller status register.

use bitflags::bitflags;

bitflags! {
    /// Bits of the byte read from the controller status port (0x64).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ControllerStatus: u8 {
        const OUTPUT_FULL   = 1 << 0; // data waiting on port 0x60
        const INPUT_FULL    = 1 << 1;
        const SYSTEM        = 1 << 2;
        const COMMAND       = 1 << 3;
        const TIMEOUT_ERROR = 1 << 6;
        const PARITY_ERROR  = 1 << 7;
    }
}

impl ControllerStatus {
    /// Returns true if a scancode is waiting to be read.
    pub const fn data_ready(self) -> bool {
        self.contains(ControllerStatus::OUTPUT_FULL)
    }
}
