//! Keyboard input: polling the controller and classifying scancodes.
//!
//! Only the unshifted US layout is decoded. There is no modifier tracking;
//! Shift, Ctrl and friends decode to [`KeyAction::Ignored`].

pub mod controller;
pub mod scancode;

pub use controller::Ps2Controller;

use pc_keyboard::KeyState;
use scancode::{to_ascii, ENTER, RELEASE_BIT};

/// One raw byte from the controller, tagged make or break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The byte as read from the data port.
    pub scancode: u8,
    /// `Down` for make codes, `Up` for break codes.
    pub state: KeyState,
}

impl KeyEvent {
    /// Tags a raw scancode by its high bit.
    pub fn from_scancode(scancode: u8) -> Self {
        let state = if scancode & RELEASE_BIT != 0 {
            KeyState::Up
        } else {
            KeyState::Down
        };
        KeyEvent { scancode, state }
    }

    /// The scancode with the release bit cleared.
    pub fn make_code(&self) -> u8 {
        self.scancode & !RELEASE_BIT
    }

    /// Classifies this event. Same as [`decode`] on the raw byte.
    pub fn action(&self) -> KeyAction {
        decode(self.scancode)
    }
}

/// What a scancode means to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A key was released.
    Release,
    /// Enter was pressed.
    Submit,
    /// A key with a character was pressed.
    Char(u8),
    /// A key without a character was pressed.
    Ignored,
}

/// Classifies a raw scancode.
pub fn decode(scancode: u8) -> KeyAction {
    if scancode & RELEASE_BIT != 0 {
        return KeyAction::Release;
    }
    if scancode == ENTER {
        return KeyAction::Submit;
    }
    match to_ascii(scancode) {
        Some(byte) => KeyAction::Char(byte),
        None => KeyAction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_a_press_and_release() {
        assert_eq!(decode(0x1E), KeyAction::Char(b'a'));
        assert_eq!(decode(0x9E), KeyAction::Release);
    }

    #[test]
    fn test_decode_enter() {
        assert_eq!(decode(0x1C), KeyAction::Submit);
        assert_eq!(decode(0x9C), KeyAction::Release);
    }

    #[test]
    fn test_decode_unmapped_is_ignored() {
        // left shift, F1, caps lock
        assert_eq!(decode(0x2A), KeyAction::Ignored);
        assert_eq!(decode(0x3B), KeyAction::Ignored);
        assert_eq!(decode(0x3A), KeyAction::Ignored);
        assert_eq!(decode(0x00), KeyAction::Ignored);
    }

    #[test]
    fn test_every_break_code_is_release() {
        for scancode in 0x80..=0xFFu8 {
            assert_eq!(decode(scancode), KeyAction::Release);
        }
    }

    #[test]
    fn test_key_event_matches_decode() {
        let event = KeyEvent::from_scancode(0x23);
        assert_eq!(event.state, KeyState::Down);
        assert_eq!(event.action(), KeyAction::Char(b'h'));

        let event = KeyEvent::from_scancode(0xA3);
        assert_eq!(event.state, KeyState::Up);
        assert_eq!(event.make_code(), 0x23);
        assert_eq!(event.action(), KeyAction::Release);
    }
}
