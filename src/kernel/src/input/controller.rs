//! PS/2 keyboard controller, polled.

use super::KeyEvent;
use oops_common::ControllerStatus;
use oops_hal::PortIo;

/// Controller status register.
pub const STATUS_PORT: u16 = 0x64;

/// Controller output buffer.
pub const DATA_PORT: u16 = 0x60;

/// The 8042 keyboard controller, read without interrupts.
pub struct Ps2Controller<P> {
    ports: P,
}

impl<P: PortIo> Ps2Controller<P> {
    /// Creates a controller driver over `ports`.
    pub const fn new(ports: P) -> Self {
        Ps2Controller { ports }
    }

    /// Reads the status register.
    pub fn status(&mut self) -> ControllerStatus {
        ControllerStatus::from_bits_retain(self.ports.read_u8(STATUS_PORT))
    }

    /// Returns true if a scancode is waiting. Reading the status register does
    /// not consume anything, so this may be called as often as needed.
    pub fn key_event_available(&mut self) -> bool {
        self.status().data_ready()
    }

    /// Reads and consumes the pending scancode.
    ///
    /// Only meaningful after [`Ps2Controller::key_event_available`] returned
    /// true; otherwise the byte is whatever the output buffer last held.
    pub fn read_scancode(&mut self) -> u8 {
        self.ports.read_u8(DATA_PORT)
    }

    /// Reads the next key event if one is pending.
    pub fn poll_event(&mut self) -> Option<KeyEvent> {
        if self.key_event_available() {
            Some(KeyEvent::from_scancode(self.read_scancode()))
        } else {
            None
        }
    }

    /// Spins until a key event arrives.
    pub fn wait_event(&mut self) -> KeyEvent {
        loop {
            if let Some(event) = self.poll_event() {
                return event;
            }
            core::hint::spin_loop();
        }
    }

    /// The port backend, for inspection.
    pub fn ports(&self) -> &P {
        &self.ports
    }

    /// The port backend, for feeding test input.
    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }
}
