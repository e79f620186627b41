//! CRT controller cursor.
//!
//! The blinking cursor is not a cell; it is a pair of CRTC registers holding
//! the linear cell offset, reached through an index/data port pair.

use oops_hal::{CursorDevice, PortIo};

/// CRTC index (register select) port.
pub const CRTC_INDEX_PORT: u16 = 0x3D4;

/// CRTC data port.
pub const CRTC_DATA_PORT: u16 = 0x3D5;

/// Cursor location, low byte.
pub const CURSOR_LOCATION_LOW: u8 = 0x0F;

/// Cursor location, high byte.
pub const CURSOR_LOCATION_HIGH: u8 = 0x0E;

/// Hardware cursor driven through the CRTC registers.
pub struct CrtcCursor<P> {
    ports: P,
}

impl<P: PortIo> CrtcCursor<P> {
    /// Creates a cursor driver over `ports`.
    pub const fn new(ports: P) -> Self {
        CrtcCursor { ports }
    }

    /// The port backend, for inspection.
    pub fn ports(&self) -> &P {
        &self.ports
    }

    fn write_register(&mut self, register: u8, value: u8) {
        self.ports.write_u8(CRTC_INDEX_PORT, register);
        self.ports.write_u8(CRTC_DATA_PORT, value);
    }
}

impl<P: PortIo> CursorDevice for CrtcCursor<P> {
    fn set_offset(&mut self, offset: u16) {
        // `&mut self` keeps the four writes from interleaving with another update.
        let [low, high] = offset.to_le_bytes();
        self.write_register(CURSOR_LOCATION_LOW, low);
        self.write_register(CURSOR_LOCATION_HIGH, high);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::mock::MockPorts;

    #[test]
    fn test_cursor_register_sequence() {
        let mut cursor = CrtcCursor::new(MockPorts::new());
        // row 12, column 34 -> 12 * 80 + 34 = 994 = 0x03E2
        cursor.set_offset(994);

        assert_eq!(
            cursor.ports().writes(),
            &[
                (CRTC_INDEX_PORT, CURSOR_LOCATION_LOW),
                (CRTC_DATA_PORT, 0xE2),
                (CRTC_INDEX_PORT, CURSOR_LOCATION_HIGH),
                (CRTC_DATA_PORT, 0x03),
            ]
        );
    }

    #[test]
    fn test_cursor_updates_do_not_interleave() {
        let mut cursor = CrtcCursor::new(MockPorts::new());
        cursor.set_offset(1);
        cursor.set_offset(0x0102);

        let writes = cursor.ports().writes();
        assert_eq!(writes.len(), 8);
        assert_eq!(&writes[4..6], &[(CRTC_INDEX_PORT, CURSOR_LOCATION_LOW), (CRTC_DATA_PORT, 0x02)]);
        assert_eq!(&writes[6..8], &[(CRTC_INDEX_PORT, CURSOR_LOCATION_HIGH), (CRTC_DATA_PORT, 0x01)]);
    }
}
